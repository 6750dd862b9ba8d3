//! Document tree decoding.

use serde_yaml::{Mapping, Value, value::TaggedValue};

use super::error::FormatError;
use super::fields::Fields;

/// Parsed input: an insertion-ordered mapping from keys to YAML values.
///
/// Created fresh per request and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Mapping,
}

impl Document {
    /// Decode `text` into a document tree.
    ///
    /// Blank input and a `null` root decode to an empty mapping. Any other
    /// non-mapping root is rejected.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let value: Value = serde_yaml::from_str(text)?;
        match value {
            Value::Mapping(root) => Ok(Self { root }),
            Value::Null => Ok(Self::default()),
            Value::Tagged(tagged) => match *tagged {
                TaggedValue {
                    value: Value::Mapping(root),
                    ..
                } => Ok(Self { root }),
                TaggedValue { value, .. } => Err(root_kind_error(&value)),
            },
            other => Err(root_kind_error(&other)),
        }
    }

    pub fn root(&self) -> &Mapping {
        &self.root
    }

    pub fn fields(&self) -> Fields<'_> {
        Fields::new(&self.root)
    }
}

/// Shorthand for [`Document::parse`].
pub fn parse(text: &str) -> Result<Document, FormatError> {
    Document::parse(text)
}

fn root_kind_error(value: &Value) -> FormatError {
    let kind = match value {
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Null | Value::Mapping(_) | Value::Tagged(_) => "value",
    };
    FormatError::new(format!("document root must be a mapping, found a {kind}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaped_backslash_decodes_to_single_backslash() {
        let doc = parse(r#"本文: "数式: $x = 2\\cos\\theta$""#).expect("valid yaml");
        let text = doc.fields().text(&["本文"]);
        assert_eq!(text, r"数式: $x = 2\cos\theta$");
        assert_eq!(text.matches('\\').count(), 2);
    }

    #[test]
    fn multibyte_text_round_trips_exactly() {
        let doc = parse("タイトル: 二次関数のグラフ　第２回\n").expect("valid yaml");
        assert_eq!(doc.fields().text(&["タイトル"]), "二次関数のグラフ　第２回");
    }

    #[test]
    fn mapping_keys_keep_insertion_order() {
        let doc = parse("展開:\n  導入: {}\n  展開: {}\n  まとめ: {}\n").expect("valid yaml");
        let flow = doc.root().get("展開").and_then(Value::as_mapping).expect("mapping");
        let keys: Vec<_> = flow.keys().filter_map(Value::as_str).collect();
        assert_eq!(keys, ["導入", "展開", "まとめ"]);
    }

    #[test]
    fn literal_block_keeps_line_breaks() {
        let doc = parse("解説: |\n  一行目\n  二行目\n").expect("valid yaml");
        assert_eq!(doc.fields().text(&["解説"]), "一行目\n二行目\n");
    }

    #[test]
    fn blank_and_null_documents_are_empty() {
        assert!(parse("").expect("blank").root().is_empty());
        assert!(parse("~\n").expect("null").root().is_empty());
    }

    #[test]
    fn malformed_text_is_a_format_error() {
        let err = parse("タイトル: [unterminated\n").expect_err("malformed");
        assert!(err.message().contains("line"), "{}", err.message());
    }

    #[test]
    fn non_mapping_root_is_a_format_error() {
        let err = parse("- a\n- b\n").expect_err("sequence root");
        assert!(err.message().contains("sequence"));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        assert!(parse("タイトル: a\nタイトル: b\n").is_err());
    }
}
