//! Exam paper schema.

use serde_yaml::Value;

use super::document::Document;
use super::fields::{Fields, KeyChain, scalar_text, truthy};

pub const TITLE: KeyChain = &["タイトル", "試験名"];
pub const SUBTITLE: KeyChain = &["サブタイトル"];
pub const SCHOOL: KeyChain = &["学校名"];
pub const SUBJECT: KeyChain = &["科目"];
pub const TIME_LIMIT: KeyChain = &["試験時間"];
pub const TOTAL_POINTS: KeyChain = &["配点合計"];
pub const NOTES: KeyChain = &["注意事項"];
pub const QUESTIONS: KeyChain = &["大問"];
pub const NUMBER: KeyChain = &["番号"];
pub const QUESTION_TITLE: KeyChain = &["タイトル"];
pub const REQUIRED: KeyChain = &["必須"];
pub const CATEGORY: KeyChain = &["区分"];
pub const POINTS: KeyChain = &["配点"];
pub const PAGE_BREAK: KeyChain = &["改ページ"];
pub const SUB_QUESTIONS: KeyChain = &["小問", "問題"];
pub const BODY: KeyChain = &["本文"];
pub const ANSWER: KeyChain = &["解答"];
pub const EXPLANATION: KeyChain = &["解説"];

pub const REQUIRED_BADGE: &str = "必答";
/// Category value meaning "show no badge".
pub const UNLABELLED_CATEGORY: &str = "記載なし";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exam {
    pub title: String,
    pub subtitle: String,
    pub school: String,
    pub subject: String,
    pub time_limit: String,
    pub total_points: String,
    pub notes: Vec<String>,
    pub questions: Vec<MajorQuestion>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MajorQuestion {
    pub number: String,
    pub title: String,
    pub required: bool,
    pub category: String,
    pub points: Option<String>,
    pub page_break: bool,
    pub sub_questions: Vec<SubQuestion>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubQuestion {
    pub number: String,
    /// Light markup source.
    pub body: String,
    pub points: Option<String>,
    pub page_break: bool,
    pub answer: Option<String>,
    /// Light markup source.
    pub explanation: Option<String>,
    /// Written as a bare string rather than a mapping; such entries carry no
    /// answer key.
    pub plain: bool,
}

impl Exam {
    pub fn from_document(document: &Document) -> Self {
        let fields = document.fields();

        Self {
            title: fields.text(TITLE),
            subtitle: fields.text(SUBTITLE),
            school: fields.text(SCHOOL),
            subject: fields.text(SUBJECT),
            time_limit: fields.text(TIME_LIMIT),
            total_points: fields.text(TOTAL_POINTS),
            notes: fields.text_items(NOTES),
            questions: fields
                .items(QUESTIONS)
                .into_iter()
                .filter_map(Fields::of)
                .map(read_question)
                .collect(),
        }
    }
}

impl MajorQuestion {
    /// Badge shown beside the heading: required questions say so, otherwise
    /// the free-form category unless it is the explicit "none" marker.
    pub fn badge(&self) -> Option<&str> {
        if self.required {
            return Some(REQUIRED_BADGE);
        }
        let category = self.category.as_str();
        (!category.is_empty() && category != UNLABELLED_CATEGORY).then_some(category)
    }
}

fn read_question(question: Fields<'_>) -> MajorQuestion {
    let number = question.text(NUMBER);
    let title = question
        .opt_text(QUESTION_TITLE)
        .unwrap_or_else(|| number.clone());

    MajorQuestion {
        title,
        number,
        required: question.flag(REQUIRED, false),
        category: question.text(CATEGORY),
        points: points(&question),
        page_break: question.flag(PAGE_BREAK, false),
        sub_questions: question
            .items(SUB_QUESTIONS)
            .into_iter()
            .filter_map(read_sub_question)
            .collect(),
    }
}

fn read_sub_question(value: &Value) -> Option<SubQuestion> {
    let Some(sub) = Fields::of(value) else {
        return scalar_text(value).map(|body| SubQuestion {
            body: expand_escaped_newlines(&body),
            plain: true,
            ..SubQuestion::default()
        });
    };

    Some(SubQuestion {
        number: sub.text(NUMBER),
        body: expand_escaped_newlines(&sub.text(BODY)),
        points: points(&sub),
        page_break: sub.flag(PAGE_BREAK, false),
        answer: sub.opt_text(ANSWER).map(|text| expand_escaped_newlines(&text)),
        explanation: sub
            .opt_text(EXPLANATION)
            .map(|text| expand_escaped_newlines(&text)),
        plain: false,
    })
}

fn points(fields: &Fields<'_>) -> Option<String> {
    fields
        .resolve(POINTS)
        .filter(|value| truthy(value))
        .and_then(scalar_text)
}

/// Turn literal two-character `\n` sequences into line breaks.
///
/// A `\n` directly followed by an ASCII letter is left alone so TeX commands
/// such as `\neq` or `\nu` survive.
pub fn expand_escaped_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(index) = rest.find("\\n") {
        let after = &rest[index + 2..];
        out.push_str(&rest[..index]);
        if after.starts_with(|c: char| c.is_ascii_alphabetic()) {
            out.push_str("\\n");
        } else {
            out.push('\n');
        }
        rest = after;
    }

    out.push_str(rest);
    out
}
