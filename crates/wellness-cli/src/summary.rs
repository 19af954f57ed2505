//! Terminal rendering of command outcomes.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use wellness_validate::ValidationReport;

use crate::types::PredictOutcome;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn print_outcome(outcome: &PredictOutcome) {
    match outcome {
        PredictOutcome::Scored { index } => {
            println!("Mental wellness index: {index}");
        }
        PredictOutcome::Invalid { report } => {
            println!("The record is not submittable; nothing was sent.");
            print_validation_issues(report);
        }
        PredictOutcome::Failed { message } => {
            println!("{message}");
        }
    }
}

fn print_validation_issues(report: &ValidationReport) {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Problem"]);
    apply_table_style(&mut table);
    for issue in &report.issues {
        table.add_row(vec![issue.field.to_string(), issue.message.clone()]);
    }
    println!("{table}");
}
