//! Exam paper hypertext: cover page, problem pages and the answer section.

use crate::domain::exam::{Exam, MajorQuestion, SubQuestion};
use crate::presentation::views::{
    ExamAnswerGroupView, ExamAnswerView, ExamItemView, ExamQuestionView, ExamTemplate, ExamView,
    NotesDensity, PageBreak, render_template,
};

use super::markup::MarkupRenderer;
use super::types::RenderError;

pub const FALLBACK_TITLE: &str = "定期考査";
pub const MISSING_ANSWER: &str = "（解答なし）";

pub fn render_exam(exam: &Exam, markup: &MarkupRenderer) -> Result<String, RenderError> {
    let view = build_view(exam, markup)?;
    render_template(ExamTemplate::new(view))
}

pub(crate) fn build_view(exam: &Exam, markup: &MarkupRenderer) -> Result<ExamView, RenderError> {
    let questions = exam
        .questions
        .iter()
        .map(|question| question_view(question, markup))
        .collect::<Result<Vec<_>, _>>()?;

    let answers = exam
        .questions
        .iter()
        .map(|question| answer_group(question, markup))
        .collect::<Result<Vec<_>, _>>()?;

    let page_title = if exam.title.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        exam.title.clone()
    };

    Ok(ExamView {
        page_title,
        title: exam.title.clone(),
        subtitle: exam.subtitle.clone(),
        school: exam.school.clone(),
        subject: exam.subject.clone(),
        time_limit: exam.time_limit.clone(),
        total_points: (!exam.total_points.is_empty()).then(|| exam.total_points.clone()),
        density: NotesDensity::for_count(exam.notes.len()),
        notes: exam.notes.clone(),
        questions,
        answers,
    })
}

fn question_view(
    question: &MajorQuestion,
    markup: &MarkupRenderer,
) -> Result<ExamQuestionView, RenderError> {
    let items = question
        .sub_questions
        .iter()
        .map(|sub| item_view(sub, markup))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ExamQuestionView {
        page_break: PageBreak(question.page_break),
        number: question.number.clone(),
        title: question.title.clone(),
        badge: question.badge().map(str::to_owned),
        points: question.points.clone(),
        items,
    })
}

fn item_view(sub: &SubQuestion, markup: &MarkupRenderer) -> Result<ExamItemView, RenderError> {
    Ok(ExamItemView {
        page_break: PageBreak(sub.page_break),
        number: sub.number.clone(),
        body_html: markup.render(&sub.body)?,
        points: sub.points.clone(),
    })
}

/// Bare-string sub-questions carry no answer and are left out.
fn answer_group(
    question: &MajorQuestion,
    markup: &MarkupRenderer,
) -> Result<ExamAnswerGroupView, RenderError> {
    let items = question
        .sub_questions
        .iter()
        .filter(|sub| !sub.plain)
        .map(|sub| {
            let explanation_html = sub
                .explanation
                .as_deref()
                .map(|text| markup.render(text))
                .transpose()?;
            Ok(ExamAnswerView {
                number: sub.number.clone(),
                answer: sub
                    .answer
                    .clone()
                    .unwrap_or_else(|| MISSING_ANSWER.to_string()),
                explanation_html,
            })
        })
        .collect::<Result<Vec<_>, RenderError>>()?;

    Ok(ExamAnswerGroupView {
        number: question.number.clone(),
        title: question.title.clone(),
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::parse;

    fn render(yaml: &str) -> String {
        let exam = Exam::from_document(&parse(yaml).expect("yaml"));
        render_exam(&exam, &MarkupRenderer::new()).expect("exam renders")
    }

    #[test]
    fn cover_falls_back_to_default_page_title() {
        let html = render("科目: 数学\n");
        assert!(html.contains("<title>定期考査</title>"));
        assert!(html.contains("※ 試験終了までこの表紙を開かないこと"));
    }

    #[test]
    fn notes_box_tightens_for_long_lists() {
        let notes: String = (1..=10).map(|n| format!("  - 注意{n}\n")).collect();
        let html = render(&format!("注意事項:\n{notes}"));
        assert!(html.contains("style=\"font-size: 9pt; line-height: 1.2;\""));
        assert_eq!(html.matches("style=\"margin-bottom: 2px;\"").count(), 10);
    }

    #[test]
    fn question_header_shows_badge_and_points() {
        let html = render(
            "大問:\n  - 番号: 1\n    タイトル: 計算\n    必須: true\n    配点: 20\n    小問:\n      - 番号: (1)\n        本文: \"$1+1$\"\n",
        );
        assert!(html.contains("1. 計算"));
        assert!(html.contains("<span class=\"problem-type\">必答</span>"));
        assert!(html.contains("（配点 20点）"));
        assert!(html.contains("$1+1$"));
        assert!(html.contains(MISSING_ANSWER));
    }

    #[test]
    fn answers_keep_line_breaks() {
        let html = render(
            "大問:\n  - 番号: 1\n    小問:\n      - 番号: (1)\n        解答: '1行目\\n2行目'\n",
        );
        assert!(html.contains("1行目<br>2行目") || html.contains("1行目<br/>2行目"));
    }
}
