//! Routine service - answers routine form queries from the catalog

use crate::error::ApiError;
use tracing::info;
use vivefit_shared::routines::lookup_routine;
use vivefit_shared::types::{RoutineQuery, RoutineResponse};

/// Routine service
pub struct RoutineService;

impl RoutineService {
    /// Validate the form and look the routine up
    ///
    /// A combination missing from the catalog is a normal answer with
    /// `found: false`, never an error.
    pub fn find(query: &RoutineQuery) -> Result<RoutineResponse, ApiError> {
        let (category, days) = query.to_parts().map_err(|gap| {
            info!(kind = gap.kind(), field = gap.field(), "Routine form rejected");
            metrics::counter!("vivefit_validation_failures_total", "form" => "routines", "kind" => gap.kind())
                .increment(1);
            ApiError::from(gap)
        })?;

        let lookup = lookup_routine(category, days);
        let outcome = if lookup.is_found() {
            info!(category, days, "Routine generated");
            "found"
        } else if lookup.description.is_some() {
            info!(category, days, "No routine found for this combination");
            "unsupported_days"
        } else {
            info!(category, days, "No routine found for this combination");
            "unknown_category"
        };
        metrics::counter!("vivefit_routine_lookups_total", "outcome" => outcome).increment(1);

        Ok(RoutineResponse::new(category, days, lookup))
    }
}
