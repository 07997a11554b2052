use thiserror::Error;

/// Result type for trafficmon operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Create a model load error
    pub fn model_load(msg: impl Into<String>) -> Self {
        Error::ModelLoad(msg.into())
    }

    /// Create a model missing error
    pub fn model_missing(msg: impl Into<String>) -> Self {
        Error::ModelMissing(msg.into())
    }

    /// Create a feature extraction error
    pub fn feature_extraction(msg: impl Into<String>) -> Self {
        Error::FeatureExtraction(msg.into())
    }

    /// Create a mapping error
    pub fn mapping(msg: impl Into<String>) -> Self {
        Error::Mapping(msg.into())
    }

    /// Create a prediction error
    pub fn prediction(msg: impl Into<String>) -> Self {
        Error::Prediction(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }

    /// Whether the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Error context trait for adding context to errors
pub trait WithErrorContext {
    fn with_context(self, context: impl Into<String>) -> Self;
}

impl<T> WithErrorContext for Result<T> {
    fn with_context(self, context: impl Into<String>) -> Self {
        self.map_err(|e| {
            let context_str = context.into();
            match e {
                Error::Validation(msg) => Error::Validation(format!("{}: {}", context_str, msg)),
                Error::ModelLoad(msg) => Error::ModelLoad(format!("{}: {}", context_str, msg)),
                Error::ModelMissing(msg) => Error::ModelMissing(format!("{}: {}", context_str, msg)),
                Error::FeatureExtraction(msg) => Error::FeatureExtraction(format!("{}: {}", context_str, msg)),
                Error::Mapping(msg) => Error::Mapping(format!("{}: {}", context_str, msg)),
                Error::Prediction(msg) => Error::Prediction(format!("{}: {}", context_str, msg)),
                Error::Csv(msg) => Error::Csv(format!("{}: {}", context_str, msg)),
                Error::Serialization(msg) => Error::Serialization(format!("{}: {}", context_str, msg)),
                Error::Internal(msg) => Error::Internal(format!("{}: {}", context_str, msg)),
                Error::Io(err) => Error::Internal(format!("{}: {}", context_str, err)),
                Error::NoModelsAvailable => Error::NoModelsAvailable,
            }
        })
    }
}

/// Main error type for trafficmon
#[derive(Error, Debug)]
pub enum Error {
    /// Bad input shape or type supplied by the caller
    #[error("{0}")]
    Validation(String),

    /// A model artefact exists but could not be decoded
    #[error("Model load error: {0}")]
    ModelLoad(String),

    /// A model artefact is not present on disk
    #[error("Model missing: {0}")]
    ModelMissing(String),

    /// A feature value could not be coerced to a number
    #[error("Feature extraction error: {0}")]
    FeatureExtraction(String),

    /// A raw model output has no label
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// The predictor rejected the feature vector
    #[error("Prediction error: {0}")]
    Prediction(String),

    /// The model store is empty
    #[error("No models have been loaded")]
    NoModelsAvailable,

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Serialization/Deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Csv(format!("file is not valid UTF-8: {}", err))
    }
}
