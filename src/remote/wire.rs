//! JSON shapes exchanged with the plan service and their conversion to models

use std::collections::BTreeSet;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::RemotePlanError;
use crate::models::{BudgetAdvice, Destination, PlanSource, TravelPlan, TravelRequest};

/// Request body sent to the plan service
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequestBody<'a> {
    pub departure: &'a str,
    pub departure_date: NaiveDate,
    pub duration: Option<&'static str>,
    pub budget: &'a str,
    pub styles: &'a BTreeSet<String>,
}

impl<'a> From<&'a TravelRequest> for PlanRequestBody<'a> {
    fn from(request: &'a TravelRequest) -> Self {
        Self {
            departure: &request.origin,
            departure_date: request.departure_date,
            duration: request.duration.map(|d| d.key()),
            budget: &request.budget,
            styles: &request.styles,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PlanResponse {
    pub success: Option<bool>,
    pub data: Option<PlanData>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanData {
    pub destinations: Option<Vec<RemoteDestination>>,
    pub budget_breakdown: Option<BudgetBreakdown>,
    pub tips: Option<Vec<String>>,
    pub best_time: Option<String>,
    pub raw_response: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteDestination {
    #[serde(default)]
    pub name: String,
    pub reason: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub itinerary: Option<Vec<String>>,
    pub estimated_cost: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BudgetBreakdown {
    #[serde(default)]
    pub transportation: String,
    #[serde(default)]
    pub accommodation: String,
    #[serde(default)]
    pub food: String,
    #[serde(default)]
    pub activities: String,
}

impl From<RemoteDestination> for Destination {
    fn from(remote: RemoteDestination) -> Self {
        Destination {
            name: remote.name,
            reason: remote.reason,
            highlights: remote.highlights,
            itinerary: remote.itinerary,
            estimated_cost: remote.estimated_cost,
        }
    }
}

impl From<BudgetBreakdown> for BudgetAdvice {
    fn from(breakdown: BudgetBreakdown) -> Self {
        BudgetAdvice {
            accommodation: breakdown.accommodation,
            transport: breakdown.transportation,
            food: breakdown.food,
            activities: breakdown.activities,
        }
    }
}

impl PlanResponse {
    /// Turn a decoded response into a plan for `request`.
    ///
    /// Anything but `success: true` with a `data` object is an application failure.
    pub fn into_plan(self, request: &TravelRequest) -> Result<TravelPlan, RemotePlanError> {
        if self.success != Some(true) {
            return Err(RemotePlanError::Application {
                message: self.error,
            });
        }
        let data = self.data.ok_or_else(|| RemotePlanError::Application {
            message: Some("response reported success without data".to_string()),
        })?;

        Ok(TravelPlan {
            request: request.clone(),
            destinations: data
                .destinations
                .unwrap_or_default()
                .into_iter()
                .map(Destination::from)
                .collect(),
            budget_advice: data.budget_breakdown.map(BudgetAdvice::from),
            tips: data.tips.unwrap_or_default(),
            best_time: data.best_time,
            raw_response: data.raw_response,
            source: PlanSource::Remote,
            generated_at: Utc::now(),
        })
    }
}
