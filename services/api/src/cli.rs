use crate::report::{run_breakdown, run_questions, run_score, run_weighted};
use crate::report::{BreakdownArgs, ScoreArgs, WeightedArgs};
use crate::server;
use ai_dependency::config::AppConfig;
use ai_dependency::error::AppError;
use ai_dependency::telemetry::{self, LogSink};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "AI Dependency Assessment",
    about = "Score AI dependency self-assessments over HTTP or from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the questionnaire, answer options, and professions
    Questions,
    /// Score a set of answers and print the risk report
    Score(ScoreArgs),
    /// Compare the three canonical usage areas
    Breakdown(BreakdownArgs),
    /// Score the profession-aware weighted questionnaire
    Weighted(WeightedArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Questions => {
            init_cli_telemetry()?;
            run_questions();
            Ok(())
        }
        Command::Score(args) => {
            init_cli_telemetry()?;
            run_score(args)
        }
        Command::Breakdown(args) => {
            init_cli_telemetry()?;
            run_breakdown(args)
        }
        Command::Weighted(args) => {
            init_cli_telemetry()?;
            run_weighted(args)
        }
    }
}

/// Reports go to stdout, so offline commands log to stderr.
fn init_cli_telemetry() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogSink::Stderr)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["ai-dependency"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_collects_repeated_answers() {
        let cli = Cli::try_parse_from([
            "ai-dependency",
            "score",
            "--profession",
            "Developer",
            "--answer",
            "daily_usage=Often",
            "--answer",
            "decision_making=Always",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.profession.as_deref(), Some("Developer"));
                assert_eq!(args.answers.len(), 2);
                assert_eq!(
                    args.answers[1],
                    ("decision_making".to_string(), "Always".to_string())
                );
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn weighted_history_splits_on_commas() {
        let cli = Cli::try_parse_from([
            "ai-dependency",
            "weighted",
            "--profession",
            "Writer",
            "--history",
            "40,45,52",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Weighted(args)) => assert_eq!(args.history, vec![40, 45, 52]),
            other => panic!("expected weighted command, got {other:?}"),
        }
    }

    #[test]
    fn weighted_history_rejects_scores_above_one_hundred() {
        let result = Cli::try_parse_from([
            "ai-dependency",
            "weighted",
            "--profession",
            "Writer",
            "--history",
            "40,101",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn malformed_answer_is_a_usage_error() {
        let result = Cli::try_parse_from(["ai-dependency", "score", "--answer", "daily_usage"]);
        assert!(result.is_err());
    }
}
