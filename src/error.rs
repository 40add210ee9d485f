use thiserror::Error;

/// swim統一エラー型
#[derive(Debug, Error)]
pub enum SwimError {
    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    #[error("Failed to start importer for {entity}: {source}")]
    ImporterSpawn {
        entity: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Importer for {entity} failed ({status})")]
    ImporterFailure {
        entity: String,
        status: std::process::ExitStatus,
    },
}

pub type Result<T> = std::result::Result<T, SwimError>;
