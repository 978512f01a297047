//! Form input collection
//!
//! Reads the raw form fields of one submission into a [`TravelRequest`]. Values
//! are only coerced, never rejected: a missing or unusable field falls back to
//! an empty value and is reported as a [`ValidationGap`].

use std::collections::{BTreeSet, HashMap};

use chrono::{NaiveDate, Utc};
use tracing::warn;

use crate::error::ValidationGap;
use crate::local::catalog;
use crate::models::{TravelRequest, TripLength};

pub const FIELD_DEPARTURE: &str = "departure";
pub const FIELD_DEPARTURE_DATE: &str = "departureDate";
pub const FIELD_DURATION: &str = "duration";
pub const FIELD_BUDGET: &str = "budget";
pub const FIELD_STYLE: &str = "style";

/// Source of raw form values
pub trait FormSource {
    /// Value of a single-valued field, `None` when absent
    fn value(&self, field: &str) -> Option<String>;

    /// All checked values of a multi-valued field
    fn checked(&self, field: &str) -> Vec<String>;
}

/// In-memory form, filled from command line arguments or tests
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    values: HashMap<String, String>,
    checked: HashMap<String, Vec<String>>,
}

impl FieldMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(mut self, field: &str, value: impl Into<String>) -> Self {
        self.values.insert(field.to_string(), value.into());
        self
    }

    /// Set the value of `field` when one is given
    #[must_use]
    pub fn with_optional(self, field: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with_value(field, value),
            None => self,
        }
    }

    #[must_use]
    pub fn with_checked(mut self, field: &str, value: impl Into<String>) -> Self {
        self.checked
            .entry(field.to_string())
            .or_default()
            .push(value.into());
        self
    }
}

impl FormSource for FieldMap {
    fn value(&self, field: &str) -> Option<String> {
        self.values.get(field).cloned()
    }

    fn checked(&self, field: &str) -> Vec<String> {
        self.checked.get(field).cloned().unwrap_or_default()
    }
}

/// Collect a request, logging any gaps
pub fn collect(source: &impl FormSource) -> TravelRequest {
    let (request, gaps) = collect_with_gaps(source);
    for gap in &gaps {
        warn!(field = gap.field(), "Form input gap: {gap}");
    }
    request
}

/// Collect a request and return the gaps found along the way
pub fn collect_with_gaps(source: &impl FormSource) -> (TravelRequest, Vec<ValidationGap>) {
    let mut gaps = Vec::new();

    let origin = match non_empty(source.value(FIELD_DEPARTURE)) {
        Some(origin) => origin,
        None => {
            gaps.push(ValidationGap::Missing {
                field: FIELD_DEPARTURE,
            });
            String::new()
        }
    };

    let departure_date = match non_empty(source.value(FIELD_DEPARTURE_DATE)) {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d").unwrap_or_else(|_| {
            gaps.push(ValidationGap::Malformed {
                field: FIELD_DEPARTURE_DATE,
                value: raw.clone(),
            });
            Utc::now().date_naive()
        }),
        None => {
            gaps.push(ValidationGap::Missing {
                field: FIELD_DEPARTURE_DATE,
            });
            Utc::now().date_naive()
        }
    };

    let duration = match non_empty(source.value(FIELD_DURATION)) {
        Some(raw) => {
            let coerced = coerce_duration(&raw);
            if coerced.is_none() {
                gaps.push(ValidationGap::Malformed {
                    field: FIELD_DURATION,
                    value: raw,
                });
            }
            coerced
        }
        None => {
            gaps.push(ValidationGap::Missing {
                field: FIELD_DURATION,
            });
            None
        }
    };

    let budget = match non_empty(source.value(FIELD_BUDGET)) {
        Some(raw) => coerce_budget(&raw),
        None => {
            gaps.push(ValidationGap::Missing {
                field: FIELD_BUDGET,
            });
            String::new()
        }
    };

    let styles: BTreeSet<String> = source
        .checked(FIELD_STYLE)
        .into_iter()
        .filter_map(|style| non_empty(Some(style)))
        .collect();
    gaps.extend(
        styles
            .iter()
            .filter(|style| !catalog::is_known_style(style))
            .map(|style| ValidationGap::UnknownStyle(style.clone())),
    );

    let request = TravelRequest {
        origin,
        departure_date,
        duration,
        budget,
        styles,
        requested_at: Utc::now(),
    };
    (request, gaps)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Bucket key or plain day count
fn coerce_duration(raw: &str) -> Option<TripLength> {
    raw.parse::<TripLength>()
        .ok()
        .or_else(|| raw.parse::<u32>().ok().and_then(TripLength::from_days))
}

/// Plain amounts map to their bucket; any other text passes through
fn coerce_budget(raw: &str) -> String {
    match raw.parse::<u32>() {
        Ok(amount) => catalog::budget_key_for_amount(amount).to_string(),
        Err(_) => raw.to_string(),
    }
}
