use crate::presentation::views::{LessonPlanTemplate, render_template};

use super::outline::LessonPlanOutline;
use super::types::RenderError;

pub fn render_lesson_plan(outline: &LessonPlanOutline) -> Result<String, RenderError> {
    render_template(LessonPlanTemplate::new(outline))
}
