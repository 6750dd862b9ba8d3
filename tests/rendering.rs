use classprint::application::generator::{
    generate_exam_hypertext, generate_lesson_plan_hypertext, generate_worksheet_hypertext,
};
use classprint::application::render::{
    DocumentKind, RenderOutput, RenderRequest, RenderService, render_service,
};

const INLINE_PAGE_BREAK: &str = r#"style="page-break-before: always; break-before: page;""#;

fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn worksheet_page_breaks_attach_once_per_flagged_block() {
    let yaml = r#"
タイトル: 漢字テスト
解答を作成: false
問題:
  - type: header
    text: 第1部
  - 本文: 読みを書きなさい。
  - type: header
    text: 第2部
    改ページ: true
  - 本文: 書き取りをしなさい。
    改ページ: true
"#;
    let html = generate_worksheet_hypertext(yaml).expect("worksheet renders");

    assert_eq!(occurrences(&html, INLINE_PAGE_BREAK), 2);
    assert!(html.contains(&format!(r#"<div class="section-header" {INLINE_PAGE_BREAK}>第2部</div>"#)));
    assert!(html.contains(r#"<div class="section-header">第1部</div>"#));
}

#[test]
fn answer_space_scales_with_hint() {
    let yaml = r#"
問題:
  - 本文: 既定の高さ
  - 本文: 広い解答欄
    スペース: 10
"#;
    let html = generate_worksheet_hypertext(yaml).expect("worksheet renders");

    assert!(html.contains(r#"style="height: 100px;""#));
    assert!(html.contains(r#"style="height: 200px;""#));
}

#[test]
fn disabled_answer_key_omits_answer_page() {
    let yaml = r#"
解答を作成: false
問題:
  - 本文: 1 + 1 は？
    解答: ['2']
"#;
    let html = generate_worksheet_hypertext(yaml).expect("worksheet renders");

    assert!(!html.contains("解答・解説"));
    assert!(!html.contains("答: 2"));
}

#[test]
fn answer_key_lists_only_problems_with_answers() {
    let yaml = r#"
問題:
  - 番号: 問1
    本文: 答えのある問題
    解答: ['42']
  - 番号: 問2
    本文: 自由記述
  - 番号: 問3
    本文: 解説だけの問題
    解説: '**考え方**を確認する'
"#;
    let html = generate_worksheet_hypertext(yaml).expect("worksheet renders");
    let key = &html[html.find("解答・解説").expect("answer page")..];

    assert!(key.contains("<strong>問1</strong>"));
    assert!(key.contains("答: 42"));
    assert!(!key.contains("<strong>問2</strong>"));
    assert!(key.contains("<strong>問3</strong>"));
    assert!(key.contains("<strong>考え方</strong>"));
}

#[test]
fn worksheet_markup_is_sanitized() {
    let yaml = "問題:\n  - 本文: '**太字**<script>alert(1)</script>'\n";
    let html = generate_worksheet_hypertext(yaml).expect("worksheet renders");

    assert!(!html.contains("alert(1)"));
    assert!(html.contains("<strong>太字</strong>"));
}

#[test]
fn exam_page_breaks_attach_to_questions_and_items() {
    let yaml = r#"
試験名: 期末考査
大問:
  - タイトル: 第一問
    小問:
      - 本文: 一つ目
      - 本文: 二つ目
        改ページ: true
  - タイトル: 第二問
    改ページ: true
    小問:
      - 本文: 三つ目
"#;
    let html = generate_exam_hypertext(yaml).expect("exam renders");

    assert_eq!(occurrences(&html, INLINE_PAGE_BREAK), 2);
    assert!(html.contains(&format!(r#"<div class="problem-page" {INLINE_PAGE_BREAK}>"#)));
    assert!(html.contains(&format!(r#"<div class="problem-item" {INLINE_PAGE_BREAK}>"#)));
}

#[test]
fn exam_answer_page_marks_missing_answers() {
    let yaml = r#"
大問:
  - タイトル: 計算
    小問:
      - 本文: '3 × 4'
      - 本文: '12 ÷ 4'
        解答: '3'
"#;
    let html = generate_exam_hypertext(yaml).expect("exam renders");

    assert!(html.contains("（解答なし）"));
    assert!(html.contains(r#"<span class="answer-correct">3</span>"#));
}

#[test]
fn lesson_plan_evaluations_accept_strings_and_criteria() {
    let yaml = r#"
教科: 英語
評価:
  - 自己紹介ができる
  - 規準: 相手に質問できる
"#;
    let html = generate_lesson_plan_hypertext(yaml).expect("lesson plan renders");

    assert!(html.contains("<li>自己紹介ができる</li>"));
    assert!(html.contains("<li>相手に質問できる</li>"));
}

#[test]
fn lesson_plan_flow_rows_keep_declaration_order() {
    let yaml = r#"
展開:
  まとめ:
    時間: 10
    学習内容: [振り返り]
  導入:
    時間: 5
    学習内容: [あいさつ]
  展開:
    時間: 35
    学習活動: [グループ活動]
"#;
    let html = generate_lesson_plan_hypertext(yaml).expect("lesson plan renders");

    let closing = html.find("振り返り").expect("closing row");
    let intro = html.find("あいさつ").expect("intro row");
    let activity = html.find("グループ活動").expect("activity row");
    assert!(closing < intro);
    assert!(intro < activity);
}

#[test]
fn every_kind_renders_through_the_shared_service() {
    let service = render_service();
    for kind in DocumentKind::ALL {
        let output = service
            .render(&RenderRequest::new(kind, "タイトル: 共通\n"))
            .unwrap_or_else(|err| panic!("{kind} failed: {err}"));
        match (kind.is_binary(), output) {
            (true, RenderOutput::Docx(bytes)) => assert!(bytes.starts_with(b"PK")),
            (false, RenderOutput::Html(html)) => assert!(html.starts_with("<!DOCTYPE html>")),
            (_, other) => panic!("{kind} produced unexpected output of {} bytes", other.len()),
        }
    }
}

#[test]
fn duplicate_keys_are_rejected() {
    let err = generate_worksheet_hypertext("タイトル: 一\nタイトル: 二\n")
        .expect_err("duplicate key");
    assert!(err.is_format());
}
