//! Travel request submitted by the user

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Trip length bucket as offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripLength {
    #[serde(rename = "1-2")]
    OneToTwoDays,
    #[serde(rename = "3-5")]
    ThreeToFiveDays,
    #[serde(rename = "6-9")]
    SixToNineDays,
    #[serde(rename = "10+")]
    TenOrMoreDays,
}

impl TripLength {
    /// Bucket for an explicit day count. Zero days has no bucket.
    #[must_use]
    pub fn from_days(days: u32) -> Option<Self> {
        match days {
            0 => None,
            1..=2 => Some(Self::OneToTwoDays),
            3..=5 => Some(Self::ThreeToFiveDays),
            6..=9 => Some(Self::SixToNineDays),
            _ => Some(Self::TenOrMoreDays),
        }
    }

    /// Wire and form key of the bucket
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::OneToTwoDays => "1-2",
            Self::ThreeToFiveDays => "3-5",
            Self::SixToNineDays => "6-9",
            Self::TenOrMoreDays => "10+",
        }
    }

    #[must_use]
    pub fn is_shortest(self) -> bool {
        self == Self::OneToTwoDays
    }

    #[must_use]
    pub fn is_longest(self) -> bool {
        self == Self::TenOrMoreDays
    }
}

impl fmt::Display for TripLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.key())
    }
}

impl FromStr for TripLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1-2" => Ok(Self::OneToTwoDays),
            "3-5" => Ok(Self::ThreeToFiveDays),
            "6-9" => Ok(Self::SixToNineDays),
            "10+" => Ok(Self::TenOrMoreDays),
            other => Err(format!("unknown trip length '{other}'")),
        }
    }
}

/// One user submission. Immutable once collected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelRequest {
    /// Departure city
    pub origin: String,
    /// Departure date
    pub departure_date: NaiveDate,
    /// Trip length bucket, `None` when the form value was missing or unusable
    pub duration: Option<TripLength>,
    /// Budget bucket key such as `1000-3000`; unknown keys pass through
    pub budget: String,
    /// Selected travel style tags
    pub styles: BTreeSet<String>,
    /// When the submission was collected
    pub requested_at: DateTime<Utc>,
}

impl TravelRequest {
    /// Create a request departing on `departure_date` with no further preferences
    #[must_use]
    pub fn new(origin: impl Into<String>, departure_date: NaiveDate) -> Self {
        Self {
            origin: origin.into(),
            departure_date,
            duration: None,
            budget: String::new(),
            styles: BTreeSet::new(),
            requested_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: TripLength) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn with_budget(mut self, budget: impl Into<String>) -> Self {
        self.budget = budget.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.styles.insert(style.into());
        self
    }

    /// Month of departure, 1-based
    #[must_use]
    pub fn departure_month(&self) -> u32 {
        self.departure_date.month()
    }

    #[must_use]
    pub fn has_style(&self, style: &str) -> bool {
        self.styles.contains(style)
    }
}
