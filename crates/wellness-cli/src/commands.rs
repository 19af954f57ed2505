//! Command implementations for the wellness CLI.

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::debug;

use wellness_client::{ScoringClient, ScoringConfig};
use wellness_model::{Field, WellnessDraft};
use wellness_session::{FormSession, RequestState, SubmitOutcome};

use crate::cli::PredictArgs;
use crate::summary::apply_table_style;
use crate::types::PredictOutcome;

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Label", "Constraint", "Options"]);
    apply_table_style(&mut table);
    for field in Field::ALL {
        let constraint = match field.numeric_constraint() {
            Some(constraint) => constraint.describe(),
            None => "one of the listed options".to_string(),
        };
        let options = field
            .options()
            .map(|options| options.join(", "))
            .unwrap_or_default();
        table.add_row(vec![
            field.as_str().to_string(),
            field.label().to_string(),
            constraint,
            options,
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_predict(args: &PredictArgs) -> Result<PredictOutcome> {
    let draft = draft_from_args(args);
    let config = ScoringConfig {
        endpoint: args.endpoint.clone(),
        timeout_secs: args.timeout_secs,
    };
    debug!("Scoring endpoint: {}", config.endpoint);

    let client = ScoringClient::new(&config).context("create scoring client")?;
    let mut session = FormSession::with_draft(client, draft);

    // One request at a time on the UI-style single thread.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build async runtime")?;
    let outcome = runtime.block_on(session.submit());

    match outcome {
        SubmitOutcome::Invalid => Ok(PredictOutcome::Invalid {
            report: session.validation(),
        }),
        SubmitOutcome::InFlight => bail!("a request is already in flight"),
        SubmitOutcome::Completed => match session.state() {
            RequestState::Succeeded { index } => Ok(PredictOutcome::Scored { index: *index }),
            RequestState::Failed { message } => Ok(PredictOutcome::Failed {
                message: message.clone(),
            }),
            state => bail!("submission ended in unexpected state: {state:?}"),
        },
    }
}

fn draft_from_args(args: &PredictArgs) -> WellnessDraft {
    WellnessDraft {
        age: args.age,
        gender: args.gender.map(Into::into),
        occupation: args.occupation.map(Into::into),
        work_mode: args.work_mode.map(Into::into),
        screen_time_hours: args.screen_time_hours,
        work_screen_hours: args.work_screen_hours,
        leisure_screen_hours: args.leisure_screen_hours,
        sleep_hours: args.sleep_hours,
        sleep_quality: args.sleep_quality,
        stress_level: args.stress_level,
        productivity: args.productivity,
        exercise_minutes_per_week: args.exercise_minutes_per_week,
        social_hours_per_week: args.social_hours_per_week,
    }
}
