//! Lesson plan schema.

use serde_yaml::Value;

use super::document::Document;
use super::fields::{Fields, KeyChain, is_present, scalar_text};

pub const SUBJECT: KeyChain = &["教科"];
pub const UNIT_NAME: KeyChain = &["単元名"];
pub const TEXTBOOK: KeyChain = &["使用教科書"];
pub const DATETIME: KeyChain = &["日時"];
pub const SCHOOL: KeyChain = &["学校名"];
pub const AUDIENCE: KeyChain = &["対象"];
pub const VENUE: KeyChain = &["会場"];
pub const INSTRUCTOR: KeyChain = &["授業者"];
pub const GOALS: KeyChain = &["本時の目標", "目標"];
pub const FLOW: KeyChain = &["展開", "授業展開"];
pub const PHASE_DURATION: KeyChain = &["時間"];
pub const PHASE_CONTENTS: KeyChain = &["学習内容"];
pub const PHASE_ACTIVITIES: KeyChain = &["学習活動"];
pub const PHASE_NOTES: KeyChain = &["留意点"];
pub const EVALUATIONS: KeyChain = &["評価", "本時の評価"];
pub const CRITERION: KeyChain = &["規準"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LessonPlan {
    pub subject: String,
    pub unit_name: String,
    pub textbook: String,
    pub header: HeaderInfo,
    pub goals: Vec<String>,
    pub phases: Vec<Phase>,
    pub evaluations: Vec<String>,
}

/// Identity block printed at the top of the plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderInfo {
    pub datetime: String,
    pub school: String,
    pub audience: String,
    pub venue: String,
    pub instructor: String,
}

/// One named segment of the lesson's time flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phase {
    pub name: String,
    pub duration: String,
    pub contents: Vec<String>,
    pub activities: Vec<String>,
    pub notes: Vec<String>,
}

impl LessonPlan {
    pub fn from_document(document: &Document) -> Self {
        let fields = document.fields();

        Self {
            subject: fields.text(SUBJECT),
            unit_name: fields.text(UNIT_NAME),
            textbook: fields.text(TEXTBOOK),
            header: HeaderInfo {
                datetime: fields.text(DATETIME),
                school: fields.text(SCHOOL),
                audience: fields.text(AUDIENCE),
                venue: fields.text(VENUE),
                instructor: fields.text(INSTRUCTOR),
            },
            goals: fields.text_items(GOALS),
            phases: read_phases(&fields),
            evaluations: read_evaluations(&fields),
        }
    }

    /// `<subject>科 学習指導案`
    pub fn title(&self) -> String {
        format!("{}科 学習指導案", self.subject)
    }
}

fn read_phases(fields: &Fields<'_>) -> Vec<Phase> {
    fields
        .entries(FLOW)
        .into_iter()
        .filter_map(|(name, value)| {
            // Phases declared without a body produce no row.
            let phase = Fields::of(value).filter(|_| is_present(value))?;
            Some(Phase {
                name,
                duration: phase.text(PHASE_DURATION),
                contents: phase.text_items(PHASE_CONTENTS),
                activities: phase.text_items(PHASE_ACTIVITIES),
                notes: phase.text_items(PHASE_NOTES),
            })
        })
        .collect()
}

fn read_evaluations(fields: &Fields<'_>) -> Vec<String> {
    fields
        .items(EVALUATIONS)
        .into_iter()
        .filter_map(evaluation_text)
        .filter(|text| !text.is_empty())
        .collect()
}

fn evaluation_text(value: &Value) -> Option<String> {
    match Fields::of(value) {
        Some(entry) => entry.opt_text(CRITERION),
        None => scalar_text(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::parse;

    const SAMPLE: &str = r#"
教科: 数学
単元名: 二次関数
使用教科書: 新編数学I
日時: 2024年6月1日
授業者: 山田
本時の目標:
  - 頂点を求められる
  - ""
展開:
  導入:
    時間: 10
    学習内容: [前時の復習]
    学習活動: [小テスト]
    留意点: [机間指導]
  空:
  まとめ:
    時間: 5
評価:
  - 頂点を正しく求めている
  - 規準: グラフをかける
"#;

    #[test]
    fn reads_all_sections() {
        let plan = LessonPlan::from_document(&parse(SAMPLE).expect("yaml"));
        assert_eq!(plan.title(), "数学科 学習指導案");
        assert_eq!(plan.unit_name, "二次関数");
        assert_eq!(plan.header.instructor, "山田");
        assert_eq!(plan.header.venue, "");
        assert_eq!(plan.goals, ["頂点を求められる"]);
        assert_eq!(
            plan.evaluations,
            ["頂点を正しく求めている", "グラフをかける"]
        );
    }

    #[test]
    fn phases_follow_insertion_order_and_skip_empty_bodies() {
        let plan = LessonPlan::from_document(&parse(SAMPLE).expect("yaml"));
        let names: Vec<_> = plan.phases.iter().map(|phase| phase.name.as_str()).collect();
        assert_eq!(names, ["導入", "まとめ"]);
        assert_eq!(plan.phases[0].duration, "10");
        assert_eq!(plan.phases[0].activities, ["小テスト"]);
        assert!(plan.phases[1].contents.is_empty());
    }

    #[test]
    fn legacy_keys_are_honoured() {
        let plan = LessonPlan::from_document(
            &parse("目標: [旧目標]\n授業展開:\n  導入: {時間: 5}\n本時の評価: [旧評価]\n")
                .expect("yaml"),
        );
        assert_eq!(plan.goals, ["旧目標"]);
        assert_eq!(plan.phases.len(), 1);
        assert_eq!(plan.evaluations, ["旧評価"]);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let plan = LessonPlan::from_document(&parse("").expect("yaml"));
        assert_eq!(plan, LessonPlan::default());
    }
}
