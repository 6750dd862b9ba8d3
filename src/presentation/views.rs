pub mod exam;
pub mod lesson_plan;
pub mod worksheet;

use std::fmt;

use askama::{Error as AskamaError, Template};
use thiserror::Error;

use crate::application::render::RenderError;

pub use exam::{
    ExamAnswerGroupView, ExamAnswerView, ExamItemView, ExamQuestionView, ExamTemplate, ExamView,
    NotesDensity,
};
pub use lesson_plan::LessonPlanTemplate;
pub use worksheet::{
    WorksheetAnswerView, WorksheetBlockView, WorksheetProblemView, WorksheetTemplate,
    WorksheetView,
};

/// Inline style that forces a printed page break before the element.
pub const PAGE_BREAK_STYLE: &str = "page-break-before: always; break-before: page;";

pub const MATHJAX_SRC: &str = "https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js";

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

impl From<TemplateRenderError> for RenderError {
    fn from(err: TemplateRenderError) -> Self {
        let TemplateRenderError {
            source,
            public_message,
            error,
        } = err;

        RenderError::Template {
            message: format!("{public_message} ({source}): {error}"),
        }
    }
}

pub fn render_template<T: Template>(template: T) -> Result<String, RenderError> {
    template.render().map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
        .into()
    })
}

/// Page-break marker rendered inside an opening tag.
///
/// Displays as ` style="…"` when set and as nothing otherwise, so every
/// flagged element carries the marker exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageBreak(pub bool);

impl fmt::Display for PageBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 {
            write!(f, " style=\"{PAGE_BREAK_STYLE}\"")
        } else {
            Ok(())
        }
    }
}
