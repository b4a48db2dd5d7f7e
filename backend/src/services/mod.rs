//! Business logic services
//!
//! Services wrap the shared nutrition engine with request limits,
//! logging and metrics.

pub mod nutrition;

pub use nutrition::NutritionService;
