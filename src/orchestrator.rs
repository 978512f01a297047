//! Generation-with-fallback request flow
//!
//! One orchestrator serves exactly one submission: it asks the remote plan
//! service first and, on any failure, synthesizes a local plan instead. The
//! caller always receives a plan.

use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::local::LocalPlanSynthesizer;
use crate::models::{PlanOutcome, TravelRequest};
use crate::remote::PlanService;

/// Progress of a single submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    CallingRemote,
    Success,
    FallingBack,
    Done,
}

pub struct PlanRequestOrchestrator<S, R> {
    service: S,
    synthesizer: LocalPlanSynthesizer<R>,
    phase: Phase,
}

impl<S: PlanService, R: Rng> PlanRequestOrchestrator<S, R> {
    #[must_use]
    pub fn new(service: S, synthesizer: LocalPlanSynthesizer<R>) -> Self {
        Self {
            service,
            synthesizer,
            phase: Phase::Start,
        }
    }

    /// Phase the orchestrator has reached
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn enter(&mut self, next: Phase) {
        debug!("Plan request phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    /// Produce a plan for `request`. Remote failures are logged and answered
    /// with a local plan; this never fails.
    #[instrument(skip_all, fields(origin = %request.origin))]
    pub async fn run(mut self, request: TravelRequest) -> PlanOutcome {
        self.resolve(request).await
    }

    /// Produce a local plan without contacting the remote service
    pub fn run_offline(mut self, request: TravelRequest) -> PlanOutcome {
        self.resolve_offline(request)
    }

    async fn resolve(&mut self, request: TravelRequest) -> PlanOutcome {
        self.enter(Phase::CallingRemote);

        let outcome = match self.service.fetch_plan(&request).await {
            Ok(plan) => {
                self.enter(Phase::Success);
                info!("Using plan from the remote service");
                PlanOutcome::Remote(plan)
            }
            Err(err) => {
                self.enter(Phase::FallingBack);
                warn!(kind = err.kind(), "Remote plan failed, falling back to local plan: {err}");
                PlanOutcome::Local {
                    plan: self.synthesizer.synthesize(&request),
                    cause: Some(err),
                }
            }
        };

        self.enter(Phase::Done);
        outcome
    }

    fn resolve_offline(&mut self, request: TravelRequest) -> PlanOutcome {
        info!("Offline mode, generating local plan");
        self.enter(Phase::FallingBack);
        let plan = self.synthesizer.synthesize(&request);
        self.enter(Phase::Done);
        PlanOutcome::Local { plan, cause: None }
    }
}
