//! Worksheet schema: problems, section banners and the answer key.

use serde_yaml::Value;

use super::document::Document;
use super::fields::{Fields, KeyChain, scalar_text, truthy};

pub const TITLE: KeyChain = &["タイトル"];
pub const SUBTITLE: KeyChain = &["サブタイトル"];
pub const INCLUDE_ANSWER_KEY: KeyChain = &["解答を作成"];
pub const ENTRIES: KeyChain = &["問題"];
pub const ENTRY_TYPE: KeyChain = &["type"];
pub const HEADER_TEXT: KeyChain = &["text"];
pub const PAGE_BREAK: KeyChain = &["改ページ"];
pub const NUMBER: KeyChain = &["番号"];
pub const BODY: KeyChain = &["本文"];
pub const POINTS: KeyChain = &["配点"];
pub const SUB_PROBLEMS: KeyChain = &["小問"];
pub const SPACE: KeyChain = &["スペース"];
pub const ANSWERS: KeyChain = &["解答"];
pub const EXPLANATION: KeyChain = &["解説"];

/// Discriminator value marking a section banner entry.
pub const SECTION_HEADER_TYPE: &str = "header";
pub const DEFAULT_SPACE_HINT: f64 = 5.0;
/// Length units per step of the answer-space hint.
pub const SPACE_UNIT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    pub title: String,
    pub subtitle: String,
    pub include_answer_key: bool,
    pub entries: Vec<WorksheetEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorksheetEntry {
    SectionHeader { text: String, page_break: bool },
    Problem(Problem),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub number: String,
    /// Light markup source.
    pub body: String,
    pub points: Option<String>,
    pub sub_problems: Vec<SubProblem>,
    pub space_hint: f64,
    pub page_break: bool,
    pub answers: Vec<String>,
    /// Light markup source.
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubProblem {
    Plain(String),
    Numbered { number: String, body: String },
}

impl Worksheet {
    pub fn from_document(document: &Document) -> Self {
        let fields = document.fields();
        let entries = fields
            .items(ENTRIES)
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| read_entry(index + 1, value))
            .collect();

        Self {
            title: fields.text(TITLE),
            subtitle: fields.text(SUBTITLE),
            include_answer_key: fields.flag(INCLUDE_ANSWER_KEY, true),
            entries,
        }
    }

    pub fn problems(&self) -> impl Iterator<Item = &Problem> {
        self.entries.iter().filter_map(|entry| match entry {
            WorksheetEntry::Problem(problem) => Some(problem),
            WorksheetEntry::SectionHeader { .. } => None,
        })
    }
}

impl Problem {
    /// Height of the answer-input area in pixels.
    pub fn answer_space_height(&self) -> f64 {
        self.space_hint * SPACE_UNIT
    }

    pub fn has_answer_key_entry(&self) -> bool {
        !self.answers.is_empty() || self.explanation.is_some()
    }
}

impl SubProblem {
    pub fn display_text(&self) -> String {
        match self {
            SubProblem::Plain(text) => text.clone(),
            SubProblem::Numbered { number, body } => format!("{number} {body}"),
        }
    }
}

/// `position` is the 1-based index among all entries, banners included.
fn read_entry(position: usize, value: &Value) -> Option<WorksheetEntry> {
    let entry = Fields::of(value)?;

    if entry.text(ENTRY_TYPE) == SECTION_HEADER_TYPE {
        return Some(WorksheetEntry::SectionHeader {
            text: entry.text(HEADER_TEXT),
            page_break: entry.flag(PAGE_BREAK, false),
        });
    }

    let points = entry
        .resolve(POINTS)
        .filter(|value| truthy(value))
        .and_then(scalar_text);

    let sub_problems = entry
        .items(SUB_PROBLEMS)
        .into_iter()
        .filter_map(read_sub_problem)
        .collect();

    Some(WorksheetEntry::Problem(Problem {
        number: entry
            .opt_text(NUMBER)
            .unwrap_or_else(|| position.to_string()),
        body: entry.text(BODY),
        points,
        sub_problems,
        space_hint: space_hint(&entry),
        page_break: entry.flag(PAGE_BREAK, false),
        answers: entry.text_items(ANSWERS),
        explanation: entry.opt_text(EXPLANATION),
    }))
}

/// Hints that are not positive, or whose height would overflow, use the default.
fn space_hint(entry: &Fields<'_>) -> f64 {
    Some(entry.number(SPACE, DEFAULT_SPACE_HINT))
        .filter(|hint| *hint > 0.0 && (hint * SPACE_UNIT).is_finite())
        .unwrap_or(DEFAULT_SPACE_HINT)
}

fn read_sub_problem(value: &Value) -> Option<SubProblem> {
    match Fields::of(value) {
        Some(sub) => Some(SubProblem::Numbered {
            number: sub.text(NUMBER),
            body: sub.text(BODY),
        }),
        None => scalar_text(value).map(SubProblem::Plain),
    }
}
