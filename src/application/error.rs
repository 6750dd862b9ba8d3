use std::error::Error as StdError;

use axum::{http::StatusCode, response::Response};
use thiserror::Error;

use crate::{application::render::RenderError, infra::error::InfraError};

/// Error chain captured for the response logging middleware.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub source: &'static str,
    pub status: StatusCode,
    pub messages: Vec<String>,
}

impl ErrorReport {
    pub fn from_error(source: &'static str, status: StatusCode, error: &dyn StdError) -> Self {
        let mut messages = Vec::new();
        messages.push(error.to_string());
        let mut current = error.source();
        while let Some(inner) = current {
            messages.push(inner.to_string());
            current = inner.source();
        }
        Self {
            source,
            status,
            messages,
        }
    }

    pub fn attach(self, response: &mut Response) {
        response.extensions_mut().insert(self);
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Message placed in the failure envelope.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Render(err) => err.to_string(),
            AppError::Infra(_) | AppError::Unexpected(_) => "Unexpected error occurred".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::FormatError;

    #[derive(Debug, Error)]
    #[error("outer")]
    struct Outer {
        #[source]
        inner: FormatError,
    }

    #[test]
    fn report_collects_the_source_chain() {
        let err = Outer {
            inner: FormatError::new("inner"),
        };
        let report = ErrorReport::from_error("test", StatusCode::OK, &err);
        assert_eq!(report.messages, ["outer", "inner"]);
    }

    #[test]
    fn format_errors_surface_their_message() {
        let err = AppError::from(RenderError::from(FormatError::new("bad yaml")));
        assert_eq!(err.public_message(), "bad yaml");
        assert_eq!(
            AppError::unexpected("boom").public_message(),
            "Unexpected error occurred"
        );
    }
}
