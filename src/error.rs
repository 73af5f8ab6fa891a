use thiserror::Error;

// Boundary error taxonomy. All variants are detected before a search
// begins, at construction or mutation time, never mid-search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    #[error("containers error: {0}")]
    Containers(String),

    #[error("items error: {0}")]
    Items(String),

    #[error("dimensions error: {0}")]
    Dimensions(String),

    #[error("settings error: {0}")]
    Settings(String),

    #[error("potential points error: {0}")]
    PotentialPoints(String),

    #[error("multi-process error: {0}")]
    MultiProcess(String),

    #[error("figure export error: {0}")]
    FigureExport(String),
}

pub type Result<T> = std::result::Result<T, PackError>;
