use adtgen_codegen::TrackerError;
use thiserror::Error;

/// Failure while emitting one file of one class.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The class or one of its members failed an integrity check.
    /// Output stops at that point.
    #[error("cannot emit '{class}'")]
    Catalog {
        class: String,
        #[source]
        source: Box<adtgen_schema::Error>,
    },

    /// The include set could not grow.
    #[error("cannot emit '{class}'")]
    IncludeStorage {
        class: String,
        #[source]
        source: TrackerError,
    },
}

impl EmitError {
    /// Returns true if the whole run must stop.
    pub fn is_fatal(&self) -> bool {
        matches!(self, EmitError::IncludeStorage { .. })
    }

    pub fn class(&self) -> &str {
        match self {
            EmitError::Catalog { class, .. } | EmitError::IncludeStorage { class, .. } => class,
        }
    }
}

/// Failure that stops a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The class selection named a class missing from the registry.
    #[error(transparent)]
    Selection(#[from] Box<adtgen_schema::Error>),

    /// Include tracking ran out of storage; nothing after this class is emitted.
    #[error("generation aborted at class '{class}'")]
    IncludeStorage {
        class: String,
        #[source]
        source: TrackerError,
    },
}
