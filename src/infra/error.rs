use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("csv header is required")]
    MissingHeader,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush csv output: {0}")]
    Flush(String),
    #[error("csv output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
