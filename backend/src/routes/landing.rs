//! Landing page: points at the calculator and the routine picker

use axum::Json;
use vivefit_shared::types::{LandingResponse, ToolLink};

/// GET / and GET /api/v1/ - List the available tools
pub async fn landing() -> Json<LandingResponse> {
    Json(LandingResponse {
        name: "ViveFit".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        tools: vec![
            ToolLink {
                name: "calculator".to_string(),
                path: "/api/v1/calculator".to_string(),
                description: "BMI, basal metabolic rate, daily energy and macronutrients".to_string(),
            },
            ToolLink {
                name: "routines".to_string(),
                path: "/api/v1/routines".to_string(),
                description: "Workout routine by goal and training days per week".to_string(),
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_landing_lists_both_tools() {
        let Json(response) = landing().await;
        let names: Vec<_> = response.tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["calculator", "routines"]);
    }
}
