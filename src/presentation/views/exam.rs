use askama::Template;

use super::PageBreak;

#[derive(Debug, Clone)]
pub struct ExamView {
    pub page_title: String,
    pub title: String,
    pub subtitle: String,
    pub school: String,
    pub subject: String,
    pub time_limit: String,
    pub total_points: Option<String>,
    pub notes: Vec<String>,
    pub density: NotesDensity,
    pub questions: Vec<ExamQuestionView>,
    pub answers: Vec<ExamAnswerGroupView>,
}

/// Typography tier for the cover notes box; longer lists get tighter type so
/// the cover stays on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesDensity {
    Compact,
    Dense,
    Relaxed,
    Normal,
}

impl NotesDensity {
    pub fn for_count(count: usize) -> Self {
        match count {
            n if n >= 10 => NotesDensity::Compact,
            n if n >= 8 => NotesDensity::Dense,
            n if n >= 6 => NotesDensity::Relaxed,
            _ => NotesDensity::Normal,
        }
    }

    pub fn box_style(self) -> &'static str {
        match self {
            NotesDensity::Compact => "font-size: 9pt; line-height: 1.2;",
            NotesDensity::Dense => "font-size: 9.5pt; line-height: 1.3;",
            NotesDensity::Relaxed => "font-size: 10pt; line-height: 1.4;",
            NotesDensity::Normal => "font-size: 11pt; line-height: 1.6;",
        }
    }

    pub fn item_style(self) -> &'static str {
        match self {
            NotesDensity::Compact => "margin-bottom: 2px;",
            NotesDensity::Dense => "margin-bottom: 3px;",
            NotesDensity::Relaxed => "margin-bottom: 5px;",
            NotesDensity::Normal => "margin-bottom: 10px;",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExamQuestionView {
    pub page_break: PageBreak,
    pub number: String,
    pub title: String,
    pub badge: Option<String>,
    pub points: Option<String>,
    pub items: Vec<ExamItemView>,
}

#[derive(Debug, Clone)]
pub struct ExamItemView {
    pub page_break: PageBreak,
    pub number: String,
    pub body_html: String,
    pub points: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ExamAnswerGroupView {
    pub number: String,
    pub title: String,
    pub items: Vec<ExamAnswerView>,
}

#[derive(Debug, Clone)]
pub struct ExamAnswerView {
    pub number: String,
    pub answer: String,
    pub explanation_html: Option<String>,
}

#[derive(Template)]
#[template(path = "exam.html")]
pub struct ExamTemplate {
    pub view: ExamView,
    pub print_margin: &'static str,
}

impl ExamTemplate {
    pub fn new(view: ExamView) -> Self {
        Self {
            view,
            print_margin: "15mm",
        }
    }
}
