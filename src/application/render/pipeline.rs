use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::domain::{
    document::Document, exam::Exam, lesson_plan::LessonPlan, worksheet::Worksheet,
};

use super::docx::write_docx;
use super::exam::render_exam;
use super::lesson_plan::render_lesson_plan;
use super::markup::MarkupRenderer;
use super::outline::LessonPlanOutline;
use super::types::{DocumentKind, RenderError, RenderOutput, RenderRequest, RenderService};
use super::worksheet::render_worksheet;

/// Default pipeline: YAML tree, typed schema, askama or docx-rs writer.
pub struct TemplateRenderService {
    markup: MarkupRenderer,
}

impl TemplateRenderService {
    fn new() -> Self {
        Self {
            markup: MarkupRenderer::new(),
        }
    }
}

impl Default for TemplateRenderService {
    fn default() -> Self {
        Self::new()
    }
}

static RENDER_SERVICE: Lazy<Arc<TemplateRenderService>> =
    Lazy::new(|| Arc::new(TemplateRenderService::new()));

/// Access the shared render service instance, initialised on first use.
pub fn render_service() -> Arc<TemplateRenderService> {
    Arc::clone(&RENDER_SERVICE)
}

impl RenderService for TemplateRenderService {
    fn render(&self, request: &RenderRequest) -> Result<RenderOutput, RenderError> {
        let document = Document::parse(&request.source)?;

        match request.kind {
            DocumentKind::LessonPlan => {
                let outline = LessonPlanOutline::build(&LessonPlan::from_document(&document));
                render_lesson_plan(&outline).map(RenderOutput::Html)
            }
            DocumentKind::LessonPlanDocx => {
                let outline = LessonPlanOutline::build(&LessonPlan::from_document(&document));
                write_docx(&outline).map(RenderOutput::Docx)
            }
            DocumentKind::Worksheet => {
                render_worksheet(&Worksheet::from_document(&document), &self.markup)
                    .map(RenderOutput::Html)
            }
            DocumentKind::Exam => {
                render_exam(&Exam::from_document(&document), &self.markup).map(RenderOutput::Html)
            }
        }
    }
}
