use super::errors::ReconError;
use super::models::{Artifact, RunContext};
use super::state::{RunState, StepReport, StepStatus};
use super::steps::{STEPS, StepAction, StepDescriptor};
use crate::executors::runners::ToolRunner;
use crate::plugins::{bruteforce, invocations, js_extract};
use crate::ui::{printer, progress::StepSpinner};

/// Run one step. The returned message is what gets printed on success.
pub async fn run_step(
    step: &StepDescriptor,
    ctx: &RunContext,
    runner: &dyn ToolRunner,
) -> Result<String, ReconError> {
    if let Some(input) = step.precondition {
        let path = ctx.artifact(input);
        if !path.exists() {
            return Err(ReconError::MissingInput(path));
        }
    }

    match step.action {
        StepAction::External(tool) => {
            let invocation = invocations::build(tool, ctx)
                .ok_or_else(|| ReconError::NoUrl(ctx.artifact(Artifact::Alive)))?;
            let spinner = StepSpinner::start(&invocation.command_line());
            let result = runner.run(&invocation).await;
            spinner.finish();
            result?;
            Ok(step.success.to_string())
        }
        StepAction::ExtractJs => {
            let count = js_extract::run(ctx)?;
            Ok(step.success.replace("{count}", &count.to_string()))
        }
        StepAction::Bruteforce => {
            let spinner = StepSpinner::start(step.title);
            let result = bruteforce::run(ctx, runner).await;
            spinner.finish();
            let count = result?;
            Ok(step.success.replace("{count}", &count.to_string()))
        }
    }
}

/// Render a step failure the way the console shows it.
pub fn failure_message(step: &StepDescriptor, err: &ReconError) -> String {
    match err {
        // Precondition and derived-step errors read fine on their own
        ReconError::MissingInput(_)
        | ReconError::NoJsFiles
        | ReconError::NoUrl(_)
        | ReconError::MissingOutput(_) => err.to_string(),
        _ => match step.tool() {
            Some(tool) => format!("{} failed: {}", tool, err),
            None => err.to_string(),
        },
    }
}

/// Run every step in order. A failed step never stops the ones after it.
pub async fn execute_all(ctx: &RunContext, runner: &dyn ToolRunner) -> RunState {
    let mut state = RunState::new(&ctx.target.domain);

    for step in STEPS.iter() {
        printer::print_step_heading(&step.heading(&ctx.target.domain));

        let report = match run_step(step, ctx, runner).await {
            Ok(message) => {
                printer::print_step_success(&message);
                StepReport {
                    ordinal: step.ordinal,
                    name: step.name,
                    status: StepStatus::Succeeded,
                    detail: message,
                }
            }
            Err(err) => {
                let message = failure_message(step, &err);
                printer::print_step_failure(&message);
                printer::print_step_skipped(step.name);
                StepReport {
                    ordinal: step.ordinal,
                    name: step.name,
                    status: StepStatus::Failed,
                    detail: message,
                }
            }
        };

        state.record(report);
    }

    tracing::info!(
        "{} of {} steps succeeded for {}",
        state.succeeded(),
        STEPS.len(),
        state.target
    );
    state
}
