//! Light inline markup: emphasis, strong, links and friends, expanded with
//! Comrak and cleaned with Ammonia.
//!
//! TeX spans (`$…$`, `$$…$$`) are lifted out of the markdown tree before HTML
//! generation and re-emitted verbatim, so emphasis rules never touch
//! subscripts and MathJax typesets them in the browser.

use std::collections::HashSet;

use ammonia::Builder as AmmoniaBuilder;
use comrak::{
    Arena, format_html,
    nodes::{AstNode, NodeValue},
    options::Options,
    parse_document,
};

use super::types::RenderError;

pub struct MarkupRenderer {
    options: Options<'static>,
    sanitizer: AmmoniaBuilder<'static>,
}

impl MarkupRenderer {
    pub fn new() -> Self {
        Self {
            options: default_options(),
            sanitizer: build_sanitizer(),
        }
    }

    /// Expand `source` into sanitised HTML. Blank input yields an empty string.
    pub fn render(&self, source: &str) -> Result<String, RenderError> {
        if source.trim().is_empty() {
            return Ok(String::new());
        }

        let arena = Arena::new();
        let root = parse_document(&arena, source, &self.options);
        protect_math(root);

        let mut html = String::new();
        format_html(root, &self.options, &mut html).map_err(|err| RenderError::Markup {
            message: err.to_string(),
        })?;

        Ok(self.sanitizer.clean(&html).to_string())
    }
}

impl Default for MarkupRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn default_options() -> Options<'static> {
    let mut options = Options::default();

    let ext = &mut options.extension;
    ext.strikethrough = true;
    ext.tagfilter = false;
    ext.table = true;
    ext.autolink = true;
    ext.superscript = false;
    ext.math_dollars = true;
    ext.underline = true;
    ext.cjk_friendly_emphasis = true;

    let render = &mut options.render;
    render.r#unsafe = true;
    render.hardbreaks = true;
    render.sourcepos = false;

    options
}

fn build_sanitizer() -> AmmoniaBuilder<'static> {
    let mut builder = AmmoniaBuilder::default();

    let tags: HashSet<&'static str> = HashSet::from([
        "a",
        "abbr",
        "blockquote",
        "br",
        "code",
        "del",
        "div",
        "em",
        "hr",
        "i",
        "img",
        "li",
        "ol",
        "p",
        "pre",
        "s",
        "span",
        "strong",
        "sub",
        "sup",
        "u",
        "table",
        "tbody",
        "td",
        "th",
        "thead",
        "tr",
        "ul",
    ]);
    builder.tags(tags);

    let generic: HashSet<&'static str> = HashSet::from(["class", "title", "lang"]);
    builder.generic_attributes(generic);

    builder.add_tag_attributes("a", &["target"]);
    builder.add_tag_attributes("img", &["title", "width", "height", "alt"]);
    builder.add_tag_attributes("th", &["align", "colspan", "rowspan"]);
    builder.add_tag_attributes("td", &["align", "colspan", "rowspan"]);
    builder.add_url_schemes(["http", "https", "mailto", "data"].iter().copied());

    builder
}

/// Replace every math node with its literal TeX, re-delimited and escaped.
///
/// Walks with `descendants()`, which keeps no call stack per nesting level.
fn protect_math<'a>(root: &'a AstNode<'a>) {
    for node in root.descendants() {
        let replacement = match &node.data.borrow().value {
            NodeValue::Math(math) => Some(delimit_tex(&math.literal, math.display_math)),
            _ => None,
        };

        if let Some(html) = replacement {
            node.data.borrow_mut().value = NodeValue::HtmlInline(html);
        }
    }
}

fn delimit_tex(literal: &str, display: bool) -> String {
    let delimiter = if display { "$$" } else { "$" };
    let mut out = String::with_capacity(literal.len() + 4);
    out.push_str(delimiter);
    for ch in literal.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out.push_str(delimiter);
    out
}
