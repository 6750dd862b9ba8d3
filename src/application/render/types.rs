use std::fmt;

use thiserror::Error;

use crate::domain::error::FormatError;

/// The outputs the rendering pipeline knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Lesson plan as a styled hypertext document.
    LessonPlan,
    /// Lesson plan as a word-processor document.
    LessonPlanDocx,
    Worksheet,
    Exam,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::LessonPlan,
        DocumentKind::LessonPlanDocx,
        DocumentKind::Worksheet,
        DocumentKind::Exam,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::LessonPlan => "lesson-plan",
            DocumentKind::LessonPlanDocx => "lesson-plan-docx",
            DocumentKind::Worksheet => "worksheet",
            DocumentKind::Exam => "exam",
        }
    }

    pub fn is_binary(self) -> bool {
        matches!(self, DocumentKind::LessonPlanDocx)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering request passed into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub kind: DocumentKind,
    /// Raw YAML document text.
    pub source: String,
}

impl RenderRequest {
    pub fn new(kind: DocumentKind, source: impl Into<String>) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }
}

/// Fully materialised rendering result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutput {
    Html(String),
    Docx(Vec<u8>),
}

impl RenderOutput {
    pub fn len(&self) -> usize {
        match self {
            RenderOutput::Html(html) => html.len(),
            RenderOutput::Docx(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_html(self) -> Result<String, RenderError> {
        match self {
            RenderOutput::Html(html) => Ok(html),
            RenderOutput::Docx(_) => Err(RenderError::unsupported(
                "expected hypertext output, got a word-processor document",
            )),
        }
    }

    pub fn into_docx(self) -> Result<Vec<u8>, RenderError> {
        match self {
            RenderOutput::Docx(bytes) => Ok(bytes),
            RenderOutput::Html(_) => Err(RenderError::unsupported(
                "expected a word-processor document, got hypertext output",
            )),
        }
    }
}

/// Structured errors surfaced by the rendering pipeline.
///
/// Only [`RenderError::Format`] is reachable from user input; the remaining
/// variants indicate defects in templates or document assembly.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("markup rendering failed: {message}")]
    Markup { message: String },
    #[error("template rendering failed: {message}")]
    Template { message: String },
    #[error("document assembly failed: {message}")]
    Document { message: String },
    #[error("unsupported render target: {reason}")]
    Unsupported { reason: String },
}

impl RenderError {
    pub fn document(message: impl Into<String>) -> Self {
        Self::Document {
            message: message.into(),
        }
    }

    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::Unsupported {
            reason: reason.into(),
        }
    }

    pub fn is_format(&self) -> bool {
        matches!(self, RenderError::Format(_))
    }
}

/// Trait exposed by the rendering pipeline. Implementations must be pure and
/// deterministic: given the same input, they return identical outputs or errors.
pub trait RenderService: Send + Sync {
    fn render(&self, request: &RenderRequest) -> Result<RenderOutput, RenderError>;
}
