//! `tripgen` - travel plan generator
//!
//! Collects a travel request, asks a remote plan service for a suggestion and
//! falls back to a locally synthesized plan whenever the service fails.

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod local;
pub mod logging;
pub mod models;
pub mod orchestrator;
pub mod remote;

// Re-export core types for public API
pub use collector::{FieldMap, FormSource};
pub use config::TripGenConfig;
pub use error::{TripGenError, ValidationGap};
pub use local::LocalPlanSynthesizer;
pub use models::{
    BudgetAdvice, Destination, PlanOutcome, PlanSource, TravelPlan, TravelRequest, TripLength,
};
pub use orchestrator::PlanRequestOrchestrator;
pub use remote::{PlanService, RemotePlanClient, RemotePlanError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripGenError>;
