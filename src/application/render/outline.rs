//! Intermediate description of a lesson plan shared by the hypertext and
//! word-processor writers.
//!
//! Section selection, ordering and numbering are decided here once; the
//! writers only lay out what the outline contains.

use crate::domain::lesson_plan::{LessonPlan, Phase};

pub const CONTENT_MARKER: &str = "○";
pub const ACTIVITY_MARKER: &str = "・";
pub const NOTE_MARKER: &str = "・";

pub const FLOW_COLUMNS: [&str; 3] = ["時間", "○学習内容　・学習活動", "指導上の留意点"];

/// A numbered section heading. Ordinals are fixed per section, so an omitted
/// section leaves a gap rather than renumbering its successors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeading {
    pub ordinal: &'static str,
    pub title: &'static str,
}

pub const UNIT_HEADING: SectionHeading = SectionHeading {
    ordinal: "１",
    title: "単元名",
};
pub const GOALS_HEADING: SectionHeading = SectionHeading {
    ordinal: "２",
    title: "本時の目標",
};
pub const FLOW_HEADING: SectionHeading = SectionHeading {
    ordinal: "３",
    title: "本時の展開",
};
pub const EVALUATION_HEADING: SectionHeading = SectionHeading {
    ordinal: "４",
    title: "本時の評価",
};

impl SectionHeading {
    /// `１　単元名`
    pub fn label(&self) -> String {
        format!("{}　{}", self.ordinal, self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonPlanOutline {
    pub title: String,
    pub identity: Vec<IdentityRow>,
    pub sections: Vec<OutlineSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineSection {
    pub heading: SectionHeading,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Unit(UnitBlock),
    Goals(Vec<String>),
    Flow(Vec<FlowRow>),
    Evaluations(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitBlock {
    pub name: String,
    pub textbook: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowMarker {
    Content,
    Activity,
}

impl FlowMarker {
    pub fn symbol(self) -> &'static str {
        match self {
            FlowMarker::Content => CONTENT_MARKER,
            FlowMarker::Activity => ACTIVITY_MARKER,
        }
    }

    /// CSS class for the hypertext writer.
    pub fn class(self) -> &'static str {
        match self {
            FlowMarker::Content => "activity-content",
            FlowMarker::Activity => "activity-action",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowLine {
    pub marker: FlowMarker,
    pub text: String,
}

impl FlowLine {
    pub fn marked(&self) -> String {
        format!("{}{}", self.marker.symbol(), self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRow {
    pub phase: String,
    pub duration: String,
    pub lines: Vec<FlowLine>,
    pub notes: Vec<String>,
}

impl FlowRow {
    fn from_phase(phase: &Phase) -> Self {
        let contents = non_empty(&phase.contents).map(|text| FlowLine {
            marker: FlowMarker::Content,
            text: text.to_owned(),
        });
        let activities = non_empty(&phase.activities).map(|text| FlowLine {
            marker: FlowMarker::Activity,
            text: text.to_owned(),
        });

        Self {
            phase: phase.name.clone(),
            duration: phase.duration.clone(),
            lines: contents.chain(activities).collect(),
            notes: non_empty(&phase.notes)
                .map(|note| format!("{NOTE_MARKER}{note}"))
                .collect(),
        }
    }

    /// The time cell: phase name, then `(<duration>分)` on its own line.
    pub fn time_lines(&self) -> [String; 2] {
        [self.phase.clone(), format!("({}分)", self.duration)]
    }

    pub fn content_lines(&self) -> Vec<String> {
        self.lines.iter().map(FlowLine::marked).collect()
    }
}

impl LessonPlanOutline {
    pub fn build(plan: &LessonPlan) -> Self {
        let header = &plan.header;
        let identity = [
            ("日　時", &header.datetime),
            ("学校名", &header.school),
            ("対　象", &header.audience),
            ("会　場", &header.venue),
            ("授業者", &header.instructor),
        ]
        .into_iter()
        .map(|(label, value)| IdentityRow {
            label,
            value: value.clone(),
        })
        .collect();

        let mut sections = vec![OutlineSection {
            heading: UNIT_HEADING,
            body: SectionBody::Unit(UnitBlock {
                name: plan.unit_name.clone(),
                textbook: plan.textbook.clone(),
            }),
        }];

        let goals: Vec<String> = non_empty(&plan.goals).map(str::to_owned).collect();
        if !goals.is_empty() {
            sections.push(OutlineSection {
                heading: GOALS_HEADING,
                body: SectionBody::Goals(goals),
            });
        }

        let rows: Vec<FlowRow> = plan.phases.iter().map(FlowRow::from_phase).collect();
        if !rows.is_empty() {
            sections.push(OutlineSection {
                heading: FLOW_HEADING,
                body: SectionBody::Flow(rows),
            });
        }

        let evaluations: Vec<String> = non_empty(&plan.evaluations).map(str::to_owned).collect();
        if !evaluations.is_empty() {
            sections.push(OutlineSection {
                heading: EVALUATION_HEADING,
                body: SectionBody::Evaluations(evaluations),
            });
        }

        Self {
            title: plan.title(),
            identity,
            sections,
        }
    }

    pub fn headings(&self) -> Vec<String> {
        self.sections
            .iter()
            .map(|section| section.heading.label())
            .collect()
    }
}

impl OutlineSection {
    pub fn unit(&self) -> Option<&UnitBlock> {
        match &self.body {
            SectionBody::Unit(unit) => Some(unit),
            _ => None,
        }
    }

    /// Goals and evaluations both lay out as bulleted lists.
    pub fn bullets(&self) -> Option<&[String]> {
        match &self.body {
            SectionBody::Goals(items) | SectionBody::Evaluations(items) => Some(items),
            _ => None,
        }
    }

    pub fn flow_rows(&self) -> Option<&[FlowRow]> {
        match &self.body {
            SectionBody::Flow(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.body {
            SectionBody::Goals(_) => "goals",
            SectionBody::Evaluations(_) => "evaluation",
            SectionBody::Unit(_) | SectionBody::Flow(_) => "",
        }
    }
}

fn non_empty(items: &[String]) -> impl Iterator<Item = &str> {
    items
        .iter()
        .map(String::as_str)
        .filter(|item| !item.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lesson_plan::HeaderInfo;

    fn phase(name: &str) -> Phase {
        Phase {
            name: name.to_string(),
            duration: "10".to_string(),
            contents: vec!["復習".to_string(), String::new()],
            activities: vec!["発表".to_string()],
            notes: vec!["机間指導".to_string()],
        }
    }

    #[test]
    fn unit_section_is_always_present() {
        let outline = LessonPlanOutline::build(&LessonPlan::default());
        assert_eq!(outline.headings(), ["１　単元名"]);
        assert_eq!(outline.title, "科 学習指導案");
        assert_eq!(outline.identity.len(), 5);
    }

    #[test]
    fn omitted_sections_keep_fixed_ordinals() {
        let plan = LessonPlan {
            subject: "理科".to_string(),
            evaluations: vec!["観察できる".to_string()],
            ..LessonPlan::default()
        };
        let outline = LessonPlanOutline::build(&plan);
        assert_eq!(outline.headings(), ["１　単元名", "４　本時の評価"]);
    }

    #[test]
    fn flow_rows_mark_contents_activities_and_notes() {
        let plan = LessonPlan {
            goals: vec!["目標".to_string()],
            phases: vec![phase("導入"), phase("展開")],
            header: HeaderInfo {
                venue: "理科室".to_string(),
                ..HeaderInfo::default()
            },
            ..LessonPlan::default()
        };
        let outline = LessonPlanOutline::build(&plan);
        assert_eq!(
            outline.headings(),
            ["１　単元名", "２　本時の目標", "３　本時の展開"]
        );
        assert_eq!(outline.identity[3].value, "理科室");

        let rows = outline.sections[2].flow_rows().expect("flow section");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].time_lines(), ["導入".to_string(), "(10分)".to_string()]);
        assert_eq!(rows[0].content_lines(), ["○復習", "・発表"]);
        assert_eq!(rows[0].notes, ["・机間指導"]);
    }

    #[test]
    fn goals_of_blank_strings_suppress_the_section() {
        let plan = LessonPlan {
            goals: vec![String::new()],
            ..LessonPlan::default()
        };
        assert_eq!(LessonPlanOutline::build(&plan).sections.len(), 1);
    }
}
