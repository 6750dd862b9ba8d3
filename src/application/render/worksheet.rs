//! Worksheet hypertext: problem blocks followed by an optional answer key.

use crate::domain::worksheet::{Problem, SubProblem, Worksheet, WorksheetEntry};
use crate::presentation::views::{
    PageBreak, WorksheetAnswerView, WorksheetBlockView, WorksheetProblemView, WorksheetTemplate,
    WorksheetView, render_template,
};

use super::markup::MarkupRenderer;
use super::types::RenderError;

pub const FALLBACK_TITLE: &str = "プリント";

pub fn render_worksheet(
    worksheet: &Worksheet,
    markup: &MarkupRenderer,
) -> Result<String, RenderError> {
    let view = build_view(worksheet, markup)?;
    render_template(WorksheetTemplate::new(view))
}

pub(crate) fn build_view(
    worksheet: &Worksheet,
    markup: &MarkupRenderer,
) -> Result<WorksheetView, RenderError> {
    let blocks = worksheet
        .entries
        .iter()
        .map(|entry| block_view(entry, markup))
        .collect::<Result<Vec<_>, _>>()?;

    let answer_key = if worksheet.include_answer_key {
        let answers = worksheet
            .problems()
            .filter(|problem| problem.has_answer_key_entry())
            .map(|problem| answer_view(problem, markup))
            .collect::<Result<Vec<_>, _>>()?;
        Some(answers)
    } else {
        None
    };

    let page_title = if worksheet.title.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        worksheet.title.clone()
    };

    Ok(WorksheetView {
        page_title,
        title: worksheet.title.clone(),
        subtitle: (!worksheet.subtitle.is_empty()).then(|| worksheet.subtitle.clone()),
        blocks,
        answer_key,
    })
}

fn block_view(
    entry: &WorksheetEntry,
    markup: &MarkupRenderer,
) -> Result<WorksheetBlockView, RenderError> {
    match entry {
        WorksheetEntry::SectionHeader { text, page_break } => Ok(WorksheetBlockView {
            page_break: PageBreak(*page_break),
            banner: Some(text.clone()),
            problem: None,
        }),
        WorksheetEntry::Problem(problem) => Ok(WorksheetBlockView {
            page_break: PageBreak(problem.page_break),
            banner: None,
            problem: Some(WorksheetProblemView {
                number: problem.number.clone(),
                body_html: markup.render(&problem.body)?,
                points: problem.points.clone(),
                sub_problems: problem
                    .sub_problems
                    .iter()
                    .map(SubProblem::display_text)
                    .collect(),
                space_height: format!("{}px", problem.answer_space_height()),
            }),
        }),
    }
}

fn answer_view(
    problem: &Problem,
    markup: &MarkupRenderer,
) -> Result<WorksheetAnswerView, RenderError> {
    let explanation_html = problem
        .explanation
        .as_deref()
        .map(|text| markup.render(text))
        .transpose()?;

    Ok(WorksheetAnswerView {
        number: problem.number.clone(),
        answers: problem.answers.clone(),
        explanation_html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::parse;

    fn render(yaml: &str) -> String {
        let worksheet = Worksheet::from_document(&parse(yaml).expect("yaml"));
        render_worksheet(&worksheet, &MarkupRenderer::new()).expect("worksheet renders")
    }

    #[test]
    fn untitled_worksheet_uses_fallback_page_title() {
        let html = render("問題: []\n");
        assert!(html.contains("<title>プリント</title>"));
        assert!(!html.contains("class=\"subtitle\""));
    }

    #[test]
    fn subtitle_is_wrapped_in_wave_dashes() {
        let html = render("タイトル: 復習\nサブタイトル: 第3章\n");
        assert!(html.contains("〜 第3章 〜"));
    }

    #[test]
    fn answer_key_lists_only_problems_with_answers() {
        let html = render(
            "問題:\n  - 番号: 1\n    本文: 足し算\n    解答: 3\n  - 番号: 2\n    本文: 引き算\n",
        );
        assert!(html.contains("答: 3"));
        assert_eq!(html.matches("class=\"answer-item\"").count(), 1);
        assert!(html.contains("<div class=\"page-break\"></div>"));
    }

    #[test]
    fn disabled_answer_key_emits_no_answer_section() {
        let html = render("解答を作成: false\n問題:\n  - 本文: a\n    解答: 1\n");
        assert!(!html.contains("解答・解説"));
        assert!(!html.contains("answer-page\">"));
    }

    #[test]
    fn plain_fields_are_escaped() {
        let html = render("タイトル: \"<b>x</b>\"\n");
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
    }
}
