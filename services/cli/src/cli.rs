use crate::commands::{run_batch, run_questions, run_score, BatchArgs, QuestionsArgs, ScoreArgs};
use ayursutra::config::AppConfig;
use ayursutra::error::AppError;
use ayursutra::telemetry;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ayursutra",
    about = "Score Ayurvedic dosha assessments from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a single assessment submission (default command)
    Score(ScoreArgs),
    /// Score every assessment row in a CSV export
    Batch(BatchArgs),
    /// Print the questionnaire categories and their answer choices
    Questions(QuestionsArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Score(ScoreArgs::default()));

    match command {
        Command::Score(args) => run_score(args),
        Command::Batch(args) => run_batch(args),
        Command::Questions(args) => run_questions(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_accepts_inline_json() {
        let cli = Cli::try_parse_from([
            "ayursutra",
            "score",
            "--json",
            r#"{"body_frame":"light"}"#,
            "--pretty",
        ])
        .expect("valid invocation");
        match cli.command {
            Some(Command::Score(args)) => {
                assert!(args.pretty);
                assert!(args.json.is_some());
                assert!(args.input.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn inline_json_conflicts_with_input_file() {
        let result = Cli::try_parse_from([
            "ayursutra",
            "score",
            "--json",
            "{}",
            "--input",
            "answers.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn batch_requires_a_csv_path() {
        assert!(Cli::try_parse_from(["ayursutra", "batch"]).is_err());
        assert!(Cli::try_parse_from(["ayursutra", "batch", "--csv", "export.csv"]).is_ok());
    }

    #[test]
    fn bare_invocation_defaults_to_score() {
        let cli = Cli::try_parse_from(["ayursutra"]).expect("valid invocation");
        assert!(cli.command.is_none());
    }
}
