use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("{0}")]
    Session(#[source] sqlx::Error),
    #[error("{0}")]
    Persist(#[source] sqlx::Error),
}

impl IngestError {
    pub fn stage(&self) -> &'static str {
        match self {
            IngestError::Session(_) => "session",
            IngestError::Persist(_) => "persist",
        }
    }
}
