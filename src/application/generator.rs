//! Entry points consumed by the HTTP adapter and the CLI.

use std::{sync::Arc, time::Instant};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use metrics::{counter, histogram};
use tracing::{debug, warn};

use super::render::{
    DocumentKind, RenderError, RenderOutput, RenderRequest, RenderService, render_service,
};

pub const METRIC_RENDER_TOTAL: &str = "classprint_render_total";
pub const METRIC_RENDER_FAILED_TOTAL: &str = "classprint_render_failed_total";
pub const METRIC_RENDER_MS: &str = "classprint_render_ms";

/// Thin façade over a [`RenderService`] adding logging and metrics.
#[derive(Clone)]
pub struct Generator {
    renderer: Arc<dyn RenderService>,
}

impl Generator {
    pub fn new(renderer: Arc<dyn RenderService>) -> Self {
        Self { renderer }
    }

    pub fn render(&self, kind: DocumentKind, source: &str) -> Result<RenderOutput, RenderError> {
        let started_at = Instant::now();
        let result = self.renderer.render(&RenderRequest::new(kind, source));
        let elapsed_ms = started_at.elapsed().as_secs_f64() * 1000.0;

        counter!(METRIC_RENDER_TOTAL, "kind" => kind.as_str()).increment(1);
        histogram!(METRIC_RENDER_MS, "kind" => kind.as_str()).record(elapsed_ms);

        match &result {
            Ok(output) => debug!(
                target = "classprint::application::generator",
                kind = kind.as_str(),
                input_bytes = source.len(),
                output_bytes = output.len(),
                elapsed_ms,
                "document rendered"
            ),
            Err(err) => {
                counter!(METRIC_RENDER_FAILED_TOTAL, "kind" => kind.as_str()).increment(1);
                warn!(
                    target = "classprint::application::generator",
                    kind = kind.as_str(),
                    input_bytes = source.len(),
                    error = %err,
                    "document rendering failed"
                );
            }
        }

        result
    }

    pub fn lesson_plan_html(&self, source: &str) -> Result<String, RenderError> {
        self.render(DocumentKind::LessonPlan, source)?.into_html()
    }

    pub fn lesson_plan_docx(&self, source: &str) -> Result<Vec<u8>, RenderError> {
        self.render(DocumentKind::LessonPlanDocx, source)?.into_docx()
    }

    /// Word-processor document, standard base64 for transport.
    pub fn lesson_plan_docx_base64(&self, source: &str) -> Result<String, RenderError> {
        self.lesson_plan_docx(source)
            .map(|bytes| STANDARD.encode(bytes))
    }

    pub fn worksheet_html(&self, source: &str) -> Result<String, RenderError> {
        self.render(DocumentKind::Worksheet, source)?.into_html()
    }

    pub fn exam_html(&self, source: &str) -> Result<String, RenderError> {
        self.render(DocumentKind::Exam, source)?.into_html()
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(render_service())
    }
}

pub fn generate_lesson_plan_hypertext(source: &str) -> Result<String, RenderError> {
    Generator::default().lesson_plan_html(source)
}

pub fn generate_lesson_plan_document(source: &str) -> Result<String, RenderError> {
    Generator::default().lesson_plan_docx_base64(source)
}

pub fn generate_worksheet_hypertext(source: &str) -> Result<String, RenderError> {
    Generator::default().worksheet_html(source)
}

pub fn generate_exam_hypertext(source: &str) -> Result<String, RenderError> {
    Generator::default().exam_html(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRenderer(RenderOutput);

    impl RenderService for FixedRenderer {
        fn render(&self, _request: &RenderRequest) -> Result<RenderOutput, RenderError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn docx_is_base64_encoded() {
        let generator = Generator::new(Arc::new(FixedRenderer(RenderOutput::Docx(
            b"PK".to_vec(),
        ))));
        assert_eq!(
            generator.lesson_plan_docx_base64("").expect("encodes"),
            "UEs="
        );
    }

    #[test]
    fn mismatched_output_is_unsupported() {
        let generator = Generator::new(Arc::new(FixedRenderer(RenderOutput::Docx(Vec::new()))));
        let err = generator.worksheet_html("").expect_err("html expected");
        assert!(matches!(err, RenderError::Unsupported { .. }));
    }

    #[test]
    fn free_functions_use_the_shared_pipeline() {
        let html = generate_worksheet_hypertext("タイトル: 小テスト\n").expect("renders");
        assert!(html.contains("<title>小テスト</title>"));
        let encoded = generate_lesson_plan_document("教科: 英語\n").expect("renders");
        let bytes = STANDARD.decode(encoded).expect("valid base64");
        assert!(bytes.starts_with(b"PK"));
    }
}
