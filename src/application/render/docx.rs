//! Word-processor writer for lesson plans.
//!
//! Lays out a [`LessonPlanOutline`] with `docx-rs`. Geometry is in twentieths
//! of a point (twips).

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, IndentLevel, Level, LevelJc, LevelText,
    NumberFormat, Numbering, NumberingId, PageMargin, Paragraph, Run, Shading,
    SpecialIndentType, Start, Style, StyleType, Table, TableCell, TableRow, WidthType,
};

use super::outline::{FLOW_COLUMNS, FlowRow, LessonPlanOutline, OutlineSection, UnitBlock};
use super::types::RenderError;

/// 21 cm.
pub const PAGE_WIDTH: u32 = 11906;
/// 29.7 cm.
pub const PAGE_HEIGHT: u32 = 16838;
/// 2.5 cm on every side.
pub const PAGE_MARGIN: i32 = 1417;

pub const LABEL_SHADING: &str = "F5F5F5";
pub const HEADER_ROW_SHADING: &str = "E8E8E8";

const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";
const BULLET_NUMBERING: usize = 1;

const IDENTITY_COLUMNS: [usize; 2] = [1800, 7272];
const FLOW_COLUMN_WIDTHS: [usize; 3] = [1600, 4472, 3000];

pub fn write_docx(outline: &LessonPlanOutline) -> Result<Vec<u8>, RenderError> {
    let mut docx = base_document()
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(outline.title.as_str()))
                .style(TITLE_STYLE)
                .align(AlignmentType::Center),
        )
        .add_table(identity_table(outline))
        .add_paragraph(Paragraph::new());

    for section in &outline.sections {
        docx = write_section(docx, section);
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|err| RenderError::document(err.to_string()))?;

    Ok(buffer.into_inner())
}

fn base_document() -> Docx {
    let bullet = Level::new(
        0,
        Start::new(1),
        NumberFormat::new("bullet"),
        LevelText::new("•"),
        LevelJc::new("left"),
    )
    .indent(Some(420), Some(SpecialIndentType::Hanging(420)), None, None);

    Docx::new()
        .page_size(PAGE_WIDTH, PAGE_HEIGHT)
        .page_margin(
            PageMargin::new()
                .top(PAGE_MARGIN)
                .bottom(PAGE_MARGIN)
                .left(PAGE_MARGIN)
                .right(PAGE_MARGIN),
        )
        .add_style(
            Style::new(TITLE_STYLE, StyleType::Paragraph)
                .name("Title")
                .size(56)
                .bold(),
        )
        .add_style(
            Style::new(HEADING_STYLE, StyleType::Paragraph)
                .name("heading 1")
                .size(28)
                .bold(),
        )
        .add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING).add_level(bullet))
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
}

fn write_section(docx: Docx, section: &OutlineSection) -> Docx {
    let docx = docx.add_paragraph(
        Paragraph::new()
            .add_run(Run::new().add_text(section.heading.label()))
            .style(HEADING_STYLE),
    );

    if let Some(unit) = section.unit() {
        return docx.add_paragraph(unit_paragraph(unit));
    }
    if let Some(items) = section.bullets() {
        return items
            .iter()
            .fold(docx, |docx, item| docx.add_paragraph(bullet(item)));
    }
    if let Some(rows) = section.flow_rows() {
        return docx.add_table(flow_table(rows));
    }
    docx
}

fn unit_paragraph(unit: &UnitBlock) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(unit.name.as_str()).bold())
        .add_run(Run::new().add_text(format!("（{}）", unit.textbook)))
}

fn bullet(text: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(text))
        .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0))
}

fn identity_table(outline: &LessonPlanOutline) -> Table {
    let rows = outline
        .identity
        .iter()
        .map(|row| {
            TableRow::new(vec![
                cell(&[row.label], IDENTITY_COLUMNS[0]).shading(Shading::new().fill(LABEL_SHADING)),
                cell(&[row.value.as_str()], IDENTITY_COLUMNS[1]),
            ])
        })
        .collect();

    Table::new(rows).set_grid(IDENTITY_COLUMNS.to_vec())
}

fn flow_table(rows: &[FlowRow]) -> Table {
    let header = TableRow::new(
        FLOW_COLUMNS
            .iter()
            .zip(FLOW_COLUMN_WIDTHS)
            .map(|(title, width)| {
                cell(&[*title], width).shading(Shading::new().fill(HEADER_ROW_SHADING))
            })
            .collect(),
    );

    let body = rows.iter().map(|row| {
        let time = row.time_lines();
        let content = row.content_lines();
        TableRow::new(vec![
            cell(&time, FLOW_COLUMN_WIDTHS[0]),
            cell(&content, FLOW_COLUMN_WIDTHS[1]),
            cell(&row.notes, FLOW_COLUMN_WIDTHS[2]),
        ])
    });

    Table::new(std::iter::once(header).chain(body).collect())
        .set_grid(FLOW_COLUMN_WIDTHS.to_vec())
}

/// One paragraph per line; an empty cell still gets one paragraph.
fn cell<S: AsRef<str>>(lines: &[S], width: usize) -> TableCell {
    let cell = TableCell::new().width(width, WidthType::Dxa);
    if lines.is_empty() {
        return cell.add_paragraph(Paragraph::new());
    }
    lines.iter().fold(cell, |cell, line| {
        cell.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line.as_ref())))
    })
}
