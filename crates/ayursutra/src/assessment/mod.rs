//! Dosha assessment pipeline: permissive intake, weighted accumulation,
//! normalization, dominant selection, and report assembly.

pub mod domain;
pub mod intake;
pub mod report;
pub mod scoring;

pub use domain::{Answer, Category, Dosha, DoshaWeights};
pub use intake::{AnswerSet, AssessmentCsvImporter, CsvIntakeError};
pub use report::{characteristics, recommendations, Characteristics, DoshaAnalysis};
pub use scoring::{
    accumulate, classify_balance, dominant, normalize, BalanceStatus, DoshaScores, ScoreTotals,
};
