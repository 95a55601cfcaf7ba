//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Configure the app's runtime version
//! 2. Publish the working directory
//! 3. Restart the app
//!
//! Each stage runs only if the previous one succeeded. The first two stages
//! are fatal on failure; restart failures are reported and swallowed.

use std::time::Instant;

use crate::domain::ports::{DeployEvent, DeployEventSink, PlatformCli};
use crate::domain::services::CommandPlan;
use crate::domain::value_objects::{DeployState, DeploymentTarget, Stage};
use crate::error::DeployError;

use super::options::DeployOptions;
use super::result::DeployOutcome;

/// Deploy use case - runs the gated stage pipeline
///
/// Parameterized by the platform port so tests can script each command's
/// result without spawning processes.
pub struct DeployUseCase<P>
where
    P: PlatformCli,
{
    platform: P,
    plan: CommandPlan,
}

impl<P> DeployUseCase<P>
where
    P: PlatformCli,
{
    pub fn new(platform: P, plan: CommandPlan) -> Self {
        Self { platform, plan }
    }

    /// Run every stage in order, stopping at the first failure.
    pub fn execute(
        &self,
        target: &DeploymentTarget,
        options: &DeployOptions,
        events: &dyn DeployEventSink,
    ) -> DeployOutcome {
        let started = Instant::now();
        events.on_event(DeployEvent::Started {
            target: target.clone(),
            runtime: self.plan.runtime(),
            dry_run: options.dry_run,
        });

        if options.dry_run {
            for stage in Stage::ALL {
                events.on_event(DeployEvent::Planned {
                    stage,
                    command: self.plan.command_for(stage, target).to_string(),
                });
            }
            return self.finish(target, DeployState::Start, None, started, true, events);
        }

        let mut state = DeployState::Start;
        let mut error = None;

        while let Some(stage) = state.next_stage() {
            match self.run_stage(stage, target, events) {
                Ok(()) => state = state.advance(stage, true),
                Err(err) => {
                    state = state.advance(stage, false);
                    error = Some(err);
                }
            }
        }

        self.finish(target, state, error, started, false, events)
    }

    fn run_stage(
        &self,
        stage: Stage,
        target: &DeploymentTarget,
        events: &dyn DeployEventSink,
    ) -> Result<(), DeployError> {
        let command = self.plan.command_for(stage, target);
        events.on_event(DeployEvent::StageStarted {
            stage,
            command: command.to_string(),
        });

        match self.platform.run(&command) {
            Ok(()) => {
                events.on_event(DeployEvent::StageSucceeded { stage });
                Ok(())
            }
            Err(source) => {
                events.on_event(DeployEvent::StageFailed {
                    stage,
                    fatal: stage.is_fatal(),
                    exit_code: source.exit_code(),
                    message: source.to_string(),
                });
                Err(DeployError::from_stage(stage, source))
            }
        }
    }

    fn finish(
        &self,
        target: &DeploymentTarget,
        state: DeployState,
        error: Option<DeployError>,
        started: Instant,
        dry_run: bool,
        events: &dyn DeployEventSink,
    ) -> DeployOutcome {
        let outcome = DeployOutcome {
            target: target.clone(),
            state,
            error,
            duration: started.elapsed(),
            dry_run,
        };
        events.on_event(DeployEvent::Completed {
            state: outcome.state,
            duration_ms: outcome.duration_ms(),
        });
        outcome
    }
}
