//! Local plan synthesis
//!
//! Builds a complete plan from the static catalog without any network access.
//! Used directly in offline mode and as the fallback when the remote planner
//! fails. The only nondeterminism is the destination shuffle, which draws from
//! the injected random source.

pub mod catalog;
pub mod tips;

use chrono::Utc;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::models::{Destination, PlanSource, TravelPlan, TravelRequest};
use catalog::StyleEntry;

/// Number of destinations in a plan unless configured otherwise
pub const DEFAULT_DESTINATION_COUNT: usize = 3;

pub struct LocalPlanSynthesizer<R> {
    rng: R,
    destination_count: usize,
}

impl LocalPlanSynthesizer<ThreadRng> {
    /// Synthesizer drawing from the thread-local generator
    #[must_use]
    pub fn from_thread_rng() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> LocalPlanSynthesizer<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            destination_count: DEFAULT_DESTINATION_COUNT,
        }
    }

    #[must_use]
    pub fn with_destination_count(mut self, count: usize) -> Self {
        self.destination_count = count;
        self
    }

    /// Build a plan for `request` from the static tables.
    pub fn synthesize(&mut self, request: &TravelRequest) -> TravelPlan {
        let candidates = candidate_destinations(request);
        let destinations = pick(candidates, self.destination_count, &mut self.rng);
        debug!(
            "Synthesized {} local destinations for {}",
            destinations.len(),
            request.origin
        );

        TravelPlan {
            request: request.clone(),
            destinations,
            budget_advice: Some(catalog::budget_advice(&request.budget)),
            tips: tips::travel_tips(request),
            best_time: None,
            raw_response: None,
            source: PlanSource::Local,
            generated_at: Utc::now(),
        }
    }
}

/// Distinct destinations for the requested styles, in catalog order.
///
/// Uses the whole catalog only when no style was selected. Unknown styles
/// contribute nothing, so a request naming only unknown styles has no
/// candidates.
fn candidate_destinations(request: &TravelRequest) -> Vec<Destination> {
    let entries: Vec<&StyleEntry> = if request.styles.is_empty() {
        catalog::STYLE_CATALOG.iter().collect()
    } else {
        request
            .styles
            .iter()
            .filter_map(|tag| catalog::style(tag))
            .collect()
    };

    let mut candidates: Vec<Destination> = Vec::new();
    for entry in entries {
        for name in entry.destinations {
            if candidates.iter().any(|d| d.name == *name) {
                continue;
            }
            candidates.push(Destination {
                reason: Some(format!("A favourite for {} lovers", entry.label)),
                ..Destination::named(*name)
            });
        }
    }
    candidates
}

/// Shuffle and keep the first `count`. Returns everything when there are fewer.
fn pick<T, R: Rng>(mut candidates: Vec<T>, count: usize, rng: &mut R) -> Vec<T> {
    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TripLength;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn synthesizer(seed: u64) -> LocalPlanSynthesizer<StdRng> {
        LocalPlanSynthesizer::new(StdRng::seed_from_u64(seed))
    }

    fn request() -> TravelRequest {
        TravelRequest::new("Shanghai", NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
    }

    fn names_of(styles: &[&str]) -> HashSet<&'static str> {
        styles
            .iter()
            .filter_map(|s| catalog::style(s))
            .flat_map(|e| e.destinations.iter().copied())
            .collect()
    }

    #[test]
    fn test_destinations_come_from_selected_styles() {
        let request = request().with_style("nature").with_style("food");
        let allowed = names_of(&["nature", "food"]);
        for seed in 0..20 {
            let plan = synthesizer(seed).synthesize(&request);
            assert_eq!(plan.destinations.len(), DEFAULT_DESTINATION_COUNT);
            for destination in &plan.destinations {
                assert!(allowed.contains(destination.name.as_str()));
            }
        }
    }

    #[test]
    fn test_no_styles_draws_from_full_catalog() {
        let all: HashSet<&str> = catalog::STYLE_CATALOG
            .iter()
            .flat_map(|e| e.destinations.iter().copied())
            .collect();
        for seed in 0..20 {
            let plan = synthesizer(seed).synthesize(&request());
            assert_eq!(plan.destinations.len(), DEFAULT_DESTINATION_COUNT);
            assert!(plan.destinations.iter().all(|d| all.contains(d.name.as_str())));
        }
    }

    #[test]
    fn test_only_unknown_styles_yield_no_destinations() {
        let plan = synthesizer(1).synthesize(&request().with_style("opera"));
        assert!(plan.destinations.is_empty());
        assert!(plan.budget_advice.is_some());
        assert!(!plan.tips.is_empty());
    }

    #[test]
    fn test_unknown_styles_are_ignored_next_to_known_ones() {
        let request = request().with_style("opera").with_style("food");
        let allowed = names_of(&["food"]);
        for seed in 0..20 {
            let plan = synthesizer(seed).synthesize(&request);
            assert_eq!(plan.destinations.len(), DEFAULT_DESTINATION_COUNT);
            assert!(
                plan.destinations
                    .iter()
                    .all(|d| allowed.contains(d.name.as_str()))
            );
        }
    }

    #[test]
    fn test_destinations_are_distinct() {
        // Lijiang is listed under both culture and leisure
        let request = request().with_style("culture").with_style("leisure");
        for seed in 0..50 {
            let plan = synthesizer(seed)
                .with_destination_count(20)
                .synthesize(&request);
            let names: HashSet<_> = plan.destinations.iter().map(|d| &d.name).collect();
            assert_eq!(names.len(), plan.destinations.len());
            assert_eq!(plan.destinations.len(), 15);
        }
    }

    #[test]
    fn test_fewer_candidates_than_requested() {
        let plan = synthesizer(3)
            .with_destination_count(10)
            .synthesize(&request().with_style("nature"));
        assert_eq!(plan.destinations.len(), 8);

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pick(vec!["a", "b"], 3, &mut rng).len(), 2);
        assert!(pick(Vec::<&str>::new(), 3, &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_same_destinations() {
        let request = request().with_style("adventure");
        let first = synthesizer(42).synthesize(&request);
        let second = synthesizer(42).synthesize(&request);
        assert_eq!(first.destinations, second.destinations);
    }

    #[test]
    fn test_plan_fields() {
        let request = request()
            .with_style("nature")
            .with_budget("1000-3000")
            .with_duration(TripLength::ThreeToFiveDays);
        let plan = synthesizer(7).synthesize(&request);

        assert_eq!(plan.source, PlanSource::Local);
        assert_eq!(plan.request, request);
        assert_eq!(
            plan.budget_advice,
            catalog::budget_tier("1000-3000").map(|t| t.to_advice())
        );
        assert_eq!(plan.tips, tips::travel_tips(&request));
        assert!(plan.destinations.iter().all(|d| d.reason.is_some()));
    }
}
