//! Command line definition

use clap::Parser;
use std::path::PathBuf;

use crate::collector::{
    FIELD_BUDGET, FIELD_DEPARTURE, FIELD_DEPARTURE_DATE, FIELD_DURATION, FIELD_STYLE, FieldMap,
};

/// tripgen - travel plan generator
#[derive(Parser, Debug)]
#[command(
    name = "tripgen",
    version,
    about = "Generate a travel plan, falling back to a local plan when the plan service is unavailable"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Plan service URL, overrides the configured endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Skip the plan service and generate locally
    #[arg(long)]
    pub offline: bool,

    /// Also print the plan as JSON
    #[arg(long)]
    pub json: bool,

    /// Departure city
    #[arg(short, long = "from", value_name = "CITY")]
    pub origin: Option<String>,

    /// Departure date (YYYY-MM-DD), defaults to today
    #[arg(short, long, value_name = "DATE")]
    pub date: Option<String>,

    /// Trip length: 1-2, 3-5, 6-9, 10+ or a number of days
    #[arg(long, value_name = "DAYS")]
    pub duration: Option<String>,

    /// Budget: 500-1000, 1000-3000, 3000-8000, 8000+ or an amount
    #[arg(short, long)]
    pub budget: Option<String>,

    /// Travel style, repeatable (culture, nature, food, leisure, adventure, shopping)
    #[arg(short, long = "style", value_name = "STYLE")]
    pub styles: Vec<String>,
}

impl Cli {
    /// Form fields as submitted on the command line
    #[must_use]
    pub fn form(&self) -> FieldMap {
        let form = FieldMap::new()
            .with_optional(FIELD_DEPARTURE, self.origin.clone())
            .with_optional(FIELD_DEPARTURE_DATE, self.date.clone())
            .with_optional(FIELD_DURATION, self.duration.clone())
            .with_optional(FIELD_BUDGET, self.budget.clone());
        self.styles
            .iter()
            .fold(form, |form, style| form.with_checked(FIELD_STYLE, style.clone()))
    }
}
