//! Crate-level error type and `Result` alias for stable, structured error
//! handling. Aggregates the per-module error enums; every variant is fatal
//! for the scene directory being processed, never for a whole batch.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scene identifier error: {0}")]
    Identifier(#[from] crate::core::identifier::IdentifierError),

    #[error("temporal error: {0}")]
    Temporal(#[from] crate::core::temporal::TemporalError),

    #[error("ground station error: {0}")]
    Station(#[from] crate::core::stations::UnknownStation),

    #[error("band discovery error: {0}")]
    Band(#[from] crate::core::bands::BandError),

    #[error("ESPA metadata error: {0}")]
    Espa(#[from] crate::io::espa::EspaError),

    #[error("GDAL error: {0}")]
    Gdal(#[from] crate::io::gdal::GdalError),

    #[error("document error: {0}")]
    Document(#[from] crate::core::document::DocumentError),

    #[error("writer error: {0}")]
    Writer(#[from] crate::io::writers::WriterError),
}
