//! Converts raw YAML documents into validated [`Card`]s.

use super::ParseError;
use crate::card::{Card, Section};
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;

/// Keys that must carry a non-empty value, kept in sorted order so error
/// messages list them alphabetically.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "card_id",
    "description",
    "outcome",
    "print_layout",
    "scenario",
    "title",
];

/// Accepted in place of `insight` when `insight` itself is absent.
const INSIGHT_ALIAS: &str = "consequence";

/// Renders any YAML value as display text.
///
/// Sequences become `• item` bullets and mappings become `key: value` rows;
/// continuation lines of nested values are indented two spaces.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Sequence(items) => {
            let mut lines = Vec::new();
            for item in items {
                let text = stringify(item);
                if text.is_empty() {
                    continue;
                }
                push_with_continuation(&mut lines, "• ", &text);
            }
            lines.join("\n").trim().to_string()
        }
        Value::Mapping(map) => {
            let mut lines = Vec::new();
            for (key, val) in map {
                let key = key_text(key);
                let text = stringify(val);
                if text.is_empty() {
                    lines.push(format!("{}:", key));
                } else {
                    push_with_continuation(&mut lines, &format!("{}: ", key), &text);
                }
            }
            lines.join("\n").trim().to_string()
        }
        Value::Tagged(tagged) => stringify(&tagged.value),
    }
}

fn push_with_continuation(lines: &mut Vec<String>, prefix: &str, text: &str) {
    let mut parts = text.split('\n');
    if let Some(first) = parts.next() {
        lines.push(format!("{}{}", prefix, first));
    }
    lines.extend(parts.map(|extra| format!("  {}", extra)));
}

fn key_text(key: &Value) -> String {
    match key {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        other => stringify(other),
    }
}

/// True when a required field holds something a reader would call a value.
pub fn has_required_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Sequence(items)) => !items.is_empty(),
        Some(Value::Mapping(map)) => !map.is_empty(),
        Some(Value::Tagged(tagged)) => has_required_value(Some(&tagged.value)),
        Some(_) => true,
    }
}

/// Lower-cases and trims keys; null keys are dropped and later duplicates win.
fn normalize_keys(mapping: Mapping) -> HashMap<String, Value> {
    let mut fields = HashMap::with_capacity(mapping.len());
    for (key, value) in mapping {
        if key.is_null() {
            continue;
        }
        fields.insert(key_text(&key).trim().to_lowercase(), value);
    }
    fields
}

/// Validates one document (`index` is 1-based) and builds its card.
pub fn normalize_document(index: usize, document: Value) -> Result<Card, ParseError> {
    let mapping = match document {
        Value::Mapping(mapping) => mapping,
        Value::Tagged(tagged) => match tagged.value {
            Value::Mapping(mapping) => mapping,
            _ => return Err(ParseError::NotAMapping { index }),
        },
        _ => return Err(ParseError::NotAMapping { index }),
    };

    let mut fields = normalize_keys(mapping);
    if !fields.contains_key(Section::Insight.key()) {
        if let Some(consequence) = fields.get(INSIGHT_ALIAS).cloned() {
            fields.insert(Section::Insight.key().to_string(), consequence);
        }
    }

    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !has_required_value(fields.get(*field)))
        .collect();
    if !missing.is_empty() {
        return Err(ParseError::MissingFields { index, fields: missing });
    }

    let text = |key: &str| fields.get(key).map(stringify).unwrap_or_default();
    let mut card = Card {
        card_id: text("card_id"),
        title: text("title"),
        outcome: text("outcome"),
        ..Default::default()
    };
    for section in Section::DRAW_ORDER {
        *card.section_mut(section) = text(section.key());
    }
    Ok(card)
}
