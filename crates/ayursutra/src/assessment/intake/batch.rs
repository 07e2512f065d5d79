use super::AnswerSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CsvIntakeError {
    #[error("failed to read assessment export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid assessment CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads bulk assessment exports: one CSV row per submission, headers naming
/// categories. Cells left blank are unanswered; columns the questionnaire
/// does not know are carried into the `AnswerSet` and ignored by scoring.
pub struct AssessmentCsvImporter;

impl AssessmentCsvImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<AnswerSet>, CsvIntakeError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<AnswerSet>, CsvIntakeError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let mut submissions = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let mut answers = AnswerSet::new();
            for (header, field) in headers.iter().zip(record.iter()) {
                if field.is_empty() {
                    continue;
                }
                answers.insert(header, field);
            }
            submissions.push(answers);
        }

        Ok(submissions)
    }
}
