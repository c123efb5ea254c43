use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no data range provided")]
    MissingRange,
    #[error("no spreadsheet id provided")]
    MissingSheetId,
    #[error("no data provided")]
    InvalidData,
    #[error("failed to authenticate: {0}")]
    Authentication(#[from] std::io::Error),
    #[error("remote operation failed: {0}")]
    Remote(#[from] google_sheets4::Error),
}
