//! Business logic services
//!
//! Services sit between the routes and the shared calculators: they
//! validate form input, run the calculation and record logs and metrics.

pub mod calculator;
pub mod routines;

pub use calculator::CalculatorService;
pub use routines::RoutineService;
