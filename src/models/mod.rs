//! Data models for the tripgen application
//!
//! - Request: the traveller's submission and its typed buckets
//! - Plan: destinations, budget advice and tips produced for a request

pub mod plan;
pub mod request;

// Re-export all public types for convenient access
pub use plan::{BudgetAdvice, Destination, PlanOutcome, PlanSource, TravelPlan};
pub use request::{TravelRequest, TripLength};
