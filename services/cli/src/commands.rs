use ayursutra::assessment::{
    AnswerSet, AssessmentCsvImporter, Category, Dosha, DoshaAnalysis,
};
use ayursutra::error::AppError;
use clap::Args;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Inline JSON object mapping category keys to answer values
    #[arg(long, conflicts_with = "input")]
    pub(crate) json: Option<String>,
    /// Path to a JSON submission (stdin is read when neither --json nor
    /// --input is given)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Pretty-print the JSON report
    #[arg(long)]
    pub(crate) pretty: bool,
    /// Render a human-readable summary instead of JSON
    #[arg(long, conflicts_with = "pretty")]
    pub(crate) text: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with one assessment per row, headers naming categories
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Pretty-print the JSON reports
    #[arg(long)]
    pub(crate) pretty: bool,
    /// Render human-readable summaries instead of JSON
    #[arg(long, conflicts_with = "pretty")]
    pub(crate) text: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Emit the catalog as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = read_submission(&args)?;
    let answers: AnswerSet = serde_json::from_str(&raw)?;
    let analysis = DoshaAnalysis::from_answers(&answers);

    info!(
        answered = answers.resolved().count(),
        supplied = answers.len(),
        dominant = analysis.dominant_dosha.key(),
        "scored assessment"
    );

    if args.text {
        render_analysis(&analysis);
    } else {
        print_json(&analysis, args.pretty)?;
    }
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let submissions = AssessmentCsvImporter::from_path(&args.csv)?;
    let analyses: Vec<DoshaAnalysis> = submissions
        .iter()
        .map(DoshaAnalysis::from_answers)
        .collect();

    info!(rows = analyses.len(), "scored assessment export");

    if args.text {
        for (index, analysis) in analyses.iter().enumerate() {
            println!("Assessment {}", index + 1);
            render_analysis(analysis);
            println!();
        }
    } else {
        print_json(&analyses, args.pretty)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct QuestionView {
    category: Category,
    category_label: &'static str,
    prompt: &'static str,
    choices: &'static [&'static str],
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let catalog: Vec<QuestionView> = Category::ordered()
        .into_iter()
        .map(|category| QuestionView {
            category,
            category_label: category.label(),
            prompt: category.prompt(),
            choices: category.choices(),
        })
        .collect();

    if args.json {
        print_json(&catalog, true)?;
    } else {
        for question in &catalog {
            println!("{} ({})", question.prompt, question.category_label);
            for choice in question.choices {
                println!("- {choice}");
            }
            println!();
        }
    }
    Ok(())
}

fn read_submission(args: &ScoreArgs) -> Result<String, AppError> {
    if let Some(raw) = &args.json {
        return Ok(raw.clone());
    }
    if let Some(path) = &args.input {
        return Ok(fs::read_to_string(path)?);
    }
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    Ok(raw)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), AppError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

fn render_analysis(analysis: &DoshaAnalysis) {
    println!("Constitution breakdown");
    for dosha in Dosha::ordered() {
        println!("- {}: {:.1}%", dosha.label(), analysis.scores.get(dosha));
    }

    println!(
        "\nDominant dosha: {} ({})",
        analysis.dominant_dosha.label(),
        analysis.characteristics.elements
    );
    println!("Qualities: {}", analysis.characteristics.qualities);
    println!("Traits: {}", analysis.characteristics.traits);
    println!("Balance: {}", analysis.balance_status.label());

    println!("\nRecommendations");
    for recommendation in analysis.recommendations {
        println!("- {recommendation}");
    }
}
