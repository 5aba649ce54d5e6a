use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LangMathError {
    #[error("Please select some text to convert to LangMath.")] EmptySelection,
    #[error("No API key assigned. Please assign one in the settings.")] MissingCredential,
    #[error("{0}")] NetworkFailure(String),
    #[error("{0}")] ConnectionFailure(String),
    #[error("Malformed response: {0}")] MalformedResponse(String),
}

/// Tag identifying which failure path a conversion took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptySelection,
    MissingCredential,
    NetworkFailure,
    ConnectionFailure,
    MalformedResponse,
}

/// JSON-friendly payload the host renders as a transient notice.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorNotice {
    pub kind: ErrorKind,
    pub code: &'static str,
    pub message: String,
    pub explain: &'static str,
}

pub type ConversionResult = Result<String, LangMathError>;

impl LangMathError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptySelection => ErrorKind::EmptySelection,
            Self::MissingCredential => ErrorKind::MissingCredential,
            Self::NetworkFailure(_) => ErrorKind::NetworkFailure,
            Self::ConnectionFailure(_) => ErrorKind::ConnectionFailure,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptySelection => "SEL-1001",
            Self::MissingCredential => "AI-1001",
            Self::NetworkFailure(_) => "AI-1002",
            Self::ConnectionFailure(_) => "AI-1003",
            Self::MalformedResponse(_) => "AI-1004",
        }
    }
    pub fn explain(&self) -> &'static str {
        match self {
            Self::EmptySelection => "The selection was empty so no request was made.",
            Self::MissingCredential => "The cloud backend needs an API key and none was supplied.",
            Self::NetworkFailure(_) => "The backend was reached but rejected the request.",
            Self::ConnectionFailure(_) => "The local model service could not be reached.",
            Self::MalformedResponse(_) => "The backend replied without the expected text field.",
        }
    }
    pub fn notice(&self) -> ErrorNotice {
        ErrorNotice {
            kind: self.kind(),
            code: self.code(),
            message: self.to_string(),
            explain: self.explain(),
        }
    }
}
