use askama::Template;

use crate::application::render::outline::{FLOW_COLUMNS, LessonPlanOutline};

#[derive(Template)]
#[template(path = "lesson_plan.html")]
pub struct LessonPlanTemplate<'a> {
    pub outline: &'a LessonPlanOutline,
    pub columns: [&'static str; 3],
    pub mathjax_src: &'static str,
    pub print_margin: &'static str,
}

impl<'a> LessonPlanTemplate<'a> {
    pub fn new(outline: &'a LessonPlanOutline) -> Self {
        Self {
            outline,
            columns: FLOW_COLUMNS,
            mathjax_src: super::MATHJAX_SRC,
            print_margin: "20mm",
        }
    }
}
