//! # Insight normalization
//!
//! The backend attaches an AI-generated insight to a completed family question.
//! Over its lifetime it has shipped that insight in several shapes:
//!
//! - as a structured `insight` object, or only as a raw `insightJson` string;
//! - with camelCase or snake_case field names, plus a few legacy aliases;
//! - with each field as a JSON array or as one newline-delimited string.
//!
//! This module is a compatibility shim that reconciles all of them into one
//! canonical [`Insight`]. It is pure and never panics: malformed input of any
//! kind yields `None`.
//!
//! ## Adapters
//!
//! Sources are tried in [`SOURCES`] order; the first one that yields a JSON
//! object wins. Within that object each canonical field is looked up through its
//! alias list ([`COMMON_THEMES`], [`GENERATION_DIFFERENCES`],
//! [`CONVERSATION_SUGGESTIONS`]), first present non-null key wins.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::FamilyQuestion;

/// Canonical insight shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub common_themes: Vec<String>,
    pub generation_differences: Vec<String>,
    pub conversation_suggestions: Vec<String>,
}

impl Insight {
    pub fn is_empty(&self) -> bool {
        self.common_themes.is_empty()
            && self.generation_differences.is_empty()
            && self.conversation_suggestions.is_empty()
    }
}

/// Where an insight payload may come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightSource {
    /// The structured `insight` field.
    Structured,
    /// The raw `insightJson` string.
    RawJson,
}

/// Source adapters in priority order.
pub const SOURCES: [InsightSource; 2] = [InsightSource::Structured, InsightSource::RawJson];

pub const COMMON_THEMES: &[&str] = &["commonThemes", "common_themes", "commonPoints", "common_points"];
pub const GENERATION_DIFFERENCES: &[&str] =
    &["generationDifferences", "generation_differences", "differences"];
pub const CONVERSATION_SUGGESTIONS: &[&str] = &[
    "conversationSuggestions",
    "conversation_suggestions",
    "suggestedDialogue",
    "suggested_dialogue",
];

impl InsightSource {
    fn extract(self, insight: Option<&Value>, insight_json: Option<&str>) -> Option<Map<String, Value>> {
        match self {
            InsightSource::Structured => match insight? {
                Value::Object(map) => Some(map.clone()),
                // Some responses nest the serialized object inside the field itself.
                Value::String(raw) => parse_object(raw),
                _ => None,
            },
            InsightSource::RawJson => parse_object(insight_json?),
        }
    }
}

fn parse_object(raw: &str) -> Option<Map<String, Value>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("Failed to parse insightJson: {}", e);
            None
        }
    }
}

/// Normalize an insight from its raw parts.
pub fn normalize(insight: Option<&Value>, insight_json: Option<&str>) -> Option<Insight> {
    let object = SOURCES
        .iter()
        .find_map(|source| source.extract(insight, insight_json))?;

    let normalized = Insight {
        common_themes: field(&object, COMMON_THEMES),
        generation_differences: field(&object, GENERATION_DIFFERENCES),
        conversation_suggestions: field(&object, CONVERSATION_SUGGESTIONS),
    };

    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Normalize the insight carried by a family question.
pub fn normalize_question(question: &FamilyQuestion) -> Option<Insight> {
    normalize(question.insight.as_ref(), question.insight_json.as_deref())
}

fn field(object: &Map<String, Value>, aliases: &[&str]) -> Vec<String> {
    aliases
        .iter()
        .filter_map(|key| object.get(*key))
        .find(|value| !value.is_null())
        .map(to_list)
        .unwrap_or_default()
}

fn to_list(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Bool(false) => Vec::new(),
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        Value::String(text) => split_lines(text),
        other => scalar_text(other).into_iter().collect(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn expected() -> Insight {
        Insight {
            common_themes: vec!["family dinners".into(), "travel".into()],
            generation_differences: vec!["screen time".into()],
            conversation_suggestions: vec!["Plan a trip together".into()],
        }
    }

    #[test]
    fn test_absent_inputs_yield_none() {
        assert_eq!(normalize(None, None), None);
        assert_eq!(normalize(Some(&Value::Null), Some("")), None);
    }

    #[test]
    fn test_malformed_json_yields_none() {
        assert_eq!(normalize(None, Some("{not json")), None);
        assert_eq!(normalize(None, Some("[1, 2, 3]")), None);
        assert_eq!(normalize(None, Some("\"just a string\"")), None);
        assert_eq!(normalize(Some(&json!(42)), Some("nope")), None);
    }

    #[test]
    fn test_all_empty_fields_yield_none() {
        let empty = json!({"commonThemes": [], "generationDifferences": "", "conversationSuggestions": null});
        assert_eq!(normalize(Some(&empty), None), None);
        assert_eq!(normalize(Some(&json!({"unrelated": ["x"]})), None), None);
    }

    #[test]
    fn test_naming_and_encoding_variants_agree() {
        let variants = [
            json!({
                "commonThemes": ["family dinners", "travel"],
                "generationDifferences": ["screen time"],
                "conversationSuggestions": ["Plan a trip together"]
            }),
            json!({
                "common_themes": "family dinners\ntravel",
                "generation_differences": "screen time",
                "conversation_suggestions": "Plan a trip together\n"
            }),
            json!({
                "commonPoints": "family dinners\r\n  travel  \r\n",
                "differences": ["screen time", ""],
                "suggested_dialogue": ["Plan a trip together", null]
            }),
            json!({
                "common_points": ["family dinners", "travel"],
                "generationDifferences": "\nscreen time\n",
                "suggestedDialogue": "Plan a trip together"
            }),
        ];

        for variant in &variants {
            assert_eq!(normalize(Some(variant), None), Some(expected()), "structured {variant}");
            let raw = variant.to_string();
            assert_eq!(normalize(None, Some(&raw)), Some(expected()), "raw {raw}");
        }
    }

    #[test]
    fn test_structured_wins_over_raw() {
        let structured = json!({"commonThemes": ["from object"]});
        let raw = r#"{"commonThemes": ["from raw"]}"#;
        let insight = normalize(Some(&structured), Some(raw)).unwrap();
        assert_eq!(insight.common_themes, vec!["from object".to_string()]);
    }

    #[test]
    fn test_unusable_structured_falls_back_to_raw() {
        let raw = r#"{"common_themes": "cooking"}"#;
        let insight = normalize(Some(&json!(["not", "an", "object"])), Some(raw)).unwrap();
        assert_eq!(insight.common_themes, vec!["cooking".to_string()]);
    }

    #[test]
    fn test_scalar_field_becomes_single_entry() {
        let insight = normalize(Some(&json!({"commonThemes": 3})), None).unwrap();
        assert_eq!(insight.common_themes, vec!["3".to_string()]);
    }

    #[test]
    fn test_camel_case_alias_takes_priority() {
        let value = json!({"commonThemes": ["camel"], "common_themes": ["snake"]});
        let insight = normalize(Some(&value), None).unwrap();
        assert_eq!(insight.common_themes, vec!["camel".to_string()]);
    }
}
