//! Travel plan model produced for a request

use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::request::TravelRequest;
use crate::remote::RemotePlanError;

/// Notice shown next to a plan produced because the remote planner failed
pub const FALLBACK_NOTICE: &str =
    "Could not reach the plan service, showing a locally generated plan.";

/// A recommended destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub name: String,
    pub reason: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub itinerary: Option<Vec<String>>,
    pub estimated_cost: Option<String>,
}

impl Destination {
    /// Destination known only by name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: None,
            highlights: None,
            itinerary: None,
            estimated_cost: None,
        }
    }
}

/// Spending advice for one budget bucket
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetAdvice {
    #[serde(default)]
    pub accommodation: String,
    #[serde(default)]
    pub transport: String,
    #[serde(default)]
    pub food: String,
    #[serde(default)]
    pub activities: String,
}

/// Who produced a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanSource {
    Remote,
    Local,
}

/// Complete answer to one travel request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPlan {
    pub request: TravelRequest,
    pub destinations: Vec<Destination>,
    pub budget_advice: Option<BudgetAdvice>,
    pub tips: Vec<String>,
    pub best_time: Option<String>,
    pub raw_response: Option<String>,
    pub source: PlanSource,
    pub generated_at: DateTime<Utc>,
}

/// Result of one submission. Both arms carry a renderable plan.
#[derive(Debug)]
pub enum PlanOutcome {
    Remote(TravelPlan),
    /// `cause` is `None` when the remote planner was skipped on purpose
    Local {
        plan: TravelPlan,
        cause: Option<RemotePlanError>,
    },
}

impl PlanOutcome {
    #[must_use]
    pub fn plan(&self) -> &TravelPlan {
        match self {
            PlanOutcome::Remote(plan) | PlanOutcome::Local { plan, .. } => plan,
        }
    }

    #[must_use]
    pub fn into_plan(self) -> TravelPlan {
        match self {
            PlanOutcome::Remote(plan) | PlanOutcome::Local { plan, .. } => plan,
        }
    }

    #[must_use]
    pub fn source(&self) -> PlanSource {
        match self {
            PlanOutcome::Remote(_) => PlanSource::Remote,
            PlanOutcome::Local { .. } => PlanSource::Local,
        }
    }

    /// Remote failure that caused the fallback, if any
    #[must_use]
    pub fn fallback_cause(&self) -> Option<&RemotePlanError> {
        match self {
            PlanOutcome::Local { cause, .. } => cause.as_ref(),
            PlanOutcome::Remote(_) => None,
        }
    }

    /// Soft notice for the user when the plan is a fallback
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        self.fallback_cause().map(|_| FALLBACK_NOTICE)
    }
}

impl Display for TravelPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let request = &self.request;
        writeln!(f, "📊 Your trip")?;
        writeln!(f, "   From: {}", request.origin)?;
        writeln!(f, "   Departure: {}", request.departure_date.format("%A, %B %-d, %Y"))?;
        if let Some(duration) = request.duration {
            writeln!(f, "   Length: {duration}")?;
        }
        if !request.budget.is_empty() {
            writeln!(f, "   Budget: {}", request.budget)?;
        }
        if request.styles.is_empty() {
            writeln!(f, "   Style: anything goes")?;
        } else {
            let styles: Vec<&str> = request.styles.iter().map(String::as_str).collect();
            writeln!(f, "   Style: {}", styles.join(", "))?;
        }

        writeln!(f)?;
        writeln!(f, "🎯 Recommended destinations")?;
        for destination in &self.destinations {
            writeln!(f, " • {}", destination.name)?;
            if let Some(reason) = &destination.reason {
                writeln!(f, "   {reason}")?;
            }
            if let Some(highlights) = destination.highlights.as_ref().filter(|h| !h.is_empty()) {
                writeln!(f, "   Highlights: {}", highlights.join(", "))?;
            }
            if let Some(itinerary) = &destination.itinerary {
                for (day, entry) in itinerary.iter().enumerate() {
                    writeln!(f, "   Day {}: {entry}", day + 1)?;
                }
            }
            if let Some(cost) = &destination.estimated_cost {
                writeln!(f, "   Estimated cost: {cost}")?;
            }
        }

        if let Some(advice) = &self.budget_advice {
            writeln!(f)?;
            writeln!(f, "💰 Budget advice")?;
            writeln!(f, "   🏨 Accommodation: {}", advice.accommodation)?;
            writeln!(f, "   🚗 Transport: {}", advice.transport)?;
            writeln!(f, "   🍜 Food: {}", advice.food)?;
            writeln!(f, "   🎪 Activities: {}", advice.activities)?;
        }

        if let Some(best_time) = &self.best_time {
            writeln!(f)?;
            writeln!(f, "🗓️ Best time to travel: {best_time}")?;
        }

        if !self.tips.is_empty() {
            writeln!(f)?;
            writeln!(f, "💡 Tips")?;
            for tip in &self.tips {
                writeln!(f, " • {tip}")?;
            }
        }
        Ok(())
    }
}
