//! Tolerant, default-safe field access over loosely typed mappings.
//!
//! Every schema field names a [`KeyChain`]: the keys that have historically
//! carried the concept, modern name first. Resolution picks the first key
//! whose value is present and non-empty, so an empty modern key falls back to
//! the legacy one and a missing field never raises.

use serde_yaml::{Mapping, Value};

/// Ordered fallback keys for one concept.
pub type KeyChain = &'static [&'static str];

/// Read-only view over one mapping of the document tree.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: &'a Mapping,
}

impl<'a> Fields<'a> {
    pub fn new(map: &'a Mapping) -> Self {
        Self { map }
    }

    /// View `value` as a mapping, if it is one.
    pub fn of(value: &'a Value) -> Option<Self> {
        untag(value).as_mapping().map(Self::new)
    }

    /// First present, non-empty value along `keys`.
    pub fn resolve(&self, keys: KeyChain) -> Option<&'a Value> {
        keys.iter()
            .filter_map(|key| self.map.get(*key))
            .map(untag)
            .find(|value| is_present(value))
    }

    /// Display text of a scalar field; empty when absent or not a scalar.
    pub fn text(&self, keys: KeyChain) -> String {
        self.opt_text(keys).unwrap_or_default()
    }

    pub fn opt_text(&self, keys: KeyChain) -> Option<String> {
        self.resolve(keys)
            .and_then(scalar_text)
            .filter(|text| !text.is_empty())
    }

    /// Truthiness of a field, `default` when absent.
    pub fn flag(&self, keys: KeyChain, default: bool) -> bool {
        self.resolve(keys).map_or(default, truthy)
    }

    /// Numeric field, accepting numbers and numeric strings.
    pub fn number(&self, keys: KeyChain, default: f64) -> f64 {
        self.resolve(keys)
            .and_then(|value| match value {
                Value::Number(number) => number.as_f64(),
                Value::String(text) => text.trim().parse().ok(),
                _ => None,
            })
            .filter(|number| number.is_finite())
            .unwrap_or(default)
    }

    /// Elements of a sequence field. A lone non-sequence value counts as a
    /// single element; absence yields nothing.
    pub fn items(&self, keys: KeyChain) -> Vec<&'a Value> {
        match self.resolve(keys) {
            Some(Value::Sequence(items)) => items.iter().map(untag).collect(),
            Some(other) => vec![other],
            None => Vec::new(),
        }
    }

    /// Display text of every scalar element, skipping empty ones.
    pub fn text_items(&self, keys: KeyChain) -> Vec<String> {
        self.items(keys)
            .into_iter()
            .filter_map(scalar_text)
            .filter(|text| !text.is_empty())
            .collect()
    }

    /// Entries of a mapping field in insertion order.
    pub fn entries(&self, keys: KeyChain) -> Vec<(String, &'a Value)> {
        match self.resolve(keys) {
            Some(Value::Mapping(map)) => map
                .iter()
                .filter_map(|(key, value)| scalar_text(untag(key)).map(|key| (key, untag(value))))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Strip YAML tags, which carry no meaning for rendering.
pub fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

/// Whether a value counts as present. Null and empty strings, sequences and
/// mappings are equivalent to a missing key.
pub fn is_present(value: &Value) -> bool {
    match untag(value) {
        Value::Null => false,
        Value::String(text) => !text.is_empty(),
        Value::Sequence(items) => !items.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::Tagged(_) => true,
    }
}

/// Truthiness used for flags and skip decisions: `false`, zero and empty
/// values are false.
pub fn truthy(value: &Value) -> bool {
    match untag(value) {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        other => is_present(other),
    }
}

/// Display text of a scalar. Collections have none.
pub fn scalar_text(value: &Value) -> Option<String> {
    match untag(value) {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::parse;

    const GOALS: KeyChain = &["本時の目標", "目標"];

    #[test]
    fn modern_key_wins_when_both_present() {
        let doc = parse("本時の目標: [新]\n目標: [旧]\n").expect("yaml");
        assert_eq!(doc.fields().text_items(GOALS), ["新"]);
    }

    #[test]
    fn empty_modern_key_falls_back_to_legacy() {
        let doc = parse("本時の目標: []\n目標: [旧]\n").expect("yaml");
        assert_eq!(doc.fields().text_items(GOALS), ["旧"]);
    }

    #[test]
    fn absent_fields_resolve_to_defaults() {
        let doc = parse("other: 1\n").expect("yaml");
        let fields = doc.fields();
        assert_eq!(fields.text(&["タイトル"]), "");
        assert!(fields.items(GOALS).is_empty());
        assert!(fields.entries(&["展開"]).is_empty());
        assert!(fields.flag(&["解答を作成"], true));
        assert_eq!(fields.number(&["スペース"], 5.0), 5.0);
    }

    #[test]
    fn explicit_false_flag_is_respected() {
        let doc = parse("解答を作成: false\n").expect("yaml");
        assert!(!doc.fields().flag(&["解答を作成"], true));
    }

    #[test]
    fn scalars_render_as_display_text() {
        let doc = parse("a: 45\nb: 1.5\nc: true\nd: text\n").expect("yaml");
        let fields = doc.fields();
        assert_eq!(fields.text(&["a"]), "45");
        assert_eq!(fields.text(&["b"]), "1.5");
        assert_eq!(fields.text(&["c"]), "true");
        assert_eq!(fields.text(&["d"]), "text");
    }

    #[test]
    fn lone_scalar_counts_as_single_item() {
        let doc = parse("評価: 意欲的に取り組んでいる\n").expect("yaml");
        assert_eq!(doc.fields().text_items(&["評価"]), ["意欲的に取り組んでいる"]);
    }

    #[test]
    fn numeric_strings_parse_as_numbers() {
        let doc = parse("スペース: \"8\"\n").expect("yaml");
        assert_eq!(doc.fields().number(&["スペース"], 5.0), 8.0);
    }
}
