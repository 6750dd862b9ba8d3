use askama::Template;

use super::PageBreak;

#[derive(Debug, Clone)]
pub struct WorksheetView {
    /// Document `<title>`.
    pub page_title: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub blocks: Vec<WorksheetBlockView>,
    /// `None` when the answer key is switched off.
    pub answer_key: Option<Vec<WorksheetAnswerView>>,
}

/// Either a section banner or a problem, in document order.
#[derive(Debug, Clone)]
pub struct WorksheetBlockView {
    pub page_break: PageBreak,
    pub banner: Option<String>,
    pub problem: Option<WorksheetProblemView>,
}

#[derive(Debug, Clone)]
pub struct WorksheetProblemView {
    pub number: String,
    pub body_html: String,
    pub points: Option<String>,
    pub sub_problems: Vec<String>,
    /// CSS length, e.g. `100px`.
    pub space_height: String,
}

#[derive(Debug, Clone)]
pub struct WorksheetAnswerView {
    pub number: String,
    pub answers: Vec<String>,
    pub explanation_html: Option<String>,
}

#[derive(Template)]
#[template(path = "worksheet.html")]
pub struct WorksheetTemplate {
    pub view: WorksheetView,
    pub mathjax_src: &'static str,
    pub print_margin: &'static str,
}

impl WorksheetTemplate {
    pub fn new(view: WorksheetView) -> Self {
        Self {
            view,
            mathjax_src: super::MATHJAX_SRC,
            print_margin: "20mm",
        }
    }
}
