//! CLI argument definitions for the wellness index client.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use wellness_client::{DEFAULT_ENDPOINT, REQUEST_TIMEOUT};

#[derive(Parser)]
#[command(
    name = "wellness",
    version,
    about = "Mental wellness index client - validate lifestyle metrics and score them remotely",
    long_about = "Collect lifestyle and wellness metrics, validate them against the field\n\
                  schema, and submit them to the remote scoring endpoint to obtain the\n\
                  mental wellness index."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a wellness record and submit it for scoring.
    Predict(PredictArgs),

    /// List the input fields, their constraints, and option sets.
    Fields,
}

#[derive(Parser, Debug)]
pub struct PredictArgs {
    /// Age in years (positive integer).
    #[arg(long)]
    pub age: Option<f64>,

    /// Gender.
    #[arg(long, value_enum)]
    pub gender: Option<GenderArg>,

    /// Occupation category.
    #[arg(long, value_enum)]
    pub occupation: Option<OccupationArg>,

    /// Working arrangement.
    #[arg(long = "work-mode", value_enum)]
    pub work_mode: Option<WorkModeArg>,

    /// Total screen time per day, in hours.
    #[arg(long = "screen-time-hours")]
    pub screen_time_hours: Option<f64>,

    /// Work-related screen time per day, in hours.
    #[arg(long = "work-screen-hours")]
    pub work_screen_hours: Option<f64>,

    /// Leisure screen time per day, in hours.
    #[arg(long = "leisure-screen-hours")]
    pub leisure_screen_hours: Option<f64>,

    /// Sleep per night, in hours.
    #[arg(long = "sleep-hours")]
    pub sleep_hours: Option<f64>,

    /// Sleep quality rating, integer from 1 to 5.
    #[arg(long = "sleep-quality")]
    pub sleep_quality: Option<f64>,

    /// Stress level rating, integer from 0 to 10.
    #[arg(long = "stress-level")]
    pub stress_level: Option<f64>,

    /// Productivity rating, integer from 0 to 100.
    #[arg(long)]
    pub productivity: Option<f64>,

    /// Exercise per week, in minutes.
    #[arg(long = "exercise-minutes-per-week")]
    pub exercise_minutes_per_week: Option<f64>,

    /// Social time per week, in hours.
    #[arg(long = "social-hours-per-week")]
    pub social_hours_per_week: Option<f64>,

    /// Scoring endpoint URL.
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[arg(long = "timeout-secs", value_name = "SECS", default_value_t = REQUEST_TIMEOUT.as_secs())]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OccupationArg {
    Employed,
    Student,
    SelfEmployed,
    Unemployed,
    Retired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WorkModeArg {
    Remote,
    InPerson,
    Hybrid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_predict_args() {
        let cli = Cli::try_parse_from([
            "wellness",
            "predict",
            "--age",
            "30",
            "--gender",
            "male",
            "--occupation",
            "self-employed",
            "--work-mode",
            "in-person",
            "--sleep-quality",
            "4",
        ])
        .unwrap();
        match cli.command {
            Command::Predict(args) => {
                assert_eq!(args.age, Some(30.0));
                assert_eq!(args.gender, Some(GenderArg::Male));
                assert_eq!(args.occupation, Some(OccupationArg::SelfEmployed));
                assert_eq!(args.work_mode, Some(WorkModeArg::InPerson));
                assert_eq!(args.sleep_quality, Some(4.0));
                assert_eq!(args.screen_time_hours, None);
                assert_eq!(args.endpoint, DEFAULT_ENDPOINT);
                assert_eq!(args.timeout_secs, 30);
            }
            Command::Fields => panic!("expected predict"),
        }
    }

    #[test]
    fn parse_fields_command() {
        let cli = Cli::try_parse_from(["wellness", "fields"]).unwrap();
        assert!(matches!(cli.command, Command::Fields));
    }
}
