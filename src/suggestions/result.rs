// ABOUTME: Recipe suggestion result types and lenient parsing of model output
// ABOUTME: Model text becomes the recipe schema, the model's own JSON, or a raw-text fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Server Contributors

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// A single suggested recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSuggestion {
    /// Recipe title
    pub name: String,
    /// Ingredients used by the recipe
    pub ingredients: Vec<String>,
    /// Short preparation steps
    pub steps: Vec<String>,
    /// Whether a vegan version is possible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vegan: Option<Value>,
    /// Whether a gluten-free version is possible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gluten_free: Option<Value>,
    /// Any further keys the model chose to add
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Model output that matched the requested JSON schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSuggestions {
    /// Suggested recipes
    pub recipes: Vec<RecipeSuggestion>,
    /// Ingredient name to suggested substitute
    #[serde(default)]
    pub substitutions: Map<String, Value>,
    /// Any further top-level keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Outcome of a suggestion call
///
/// Serializes as the structured object itself, as the model's own JSON
/// document when it strays from the recipe schema, or as `{"text": ...}` when
/// the reply is not a JSON document at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuggestionResult {
    /// Reply parsed into the recipe schema
    Structured(RecipeSuggestions),
    /// Reply kept verbatim
    RawText {
        /// Model text as received
        text: String,
    },
    /// JSON object or array that does not follow the recipe schema
    Unvalidated(Value),
}

impl SuggestionResult {
    /// Short label for logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Structured(_) => "structured",
            Self::RawText { .. } => "raw_text",
            Self::Unvalidated(_) => "unvalidated",
        }
    }
}

/// Remove markdown code-fence markers and surrounding whitespace
#[must_use]
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_owned()
}

/// Interpret model text; never fails
///
/// Scalars are not treated as documents and stay raw text.
#[must_use]
pub fn parse_suggestion(raw: &str) -> SuggestionResult {
    let cleaned = strip_code_fences(raw);

    let value = match serde_json::from_str::<Value>(&cleaned) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => value,
        Ok(_) | Err(_) => {
            debug!("Model reply is not a JSON document");
            return SuggestionResult::RawText {
                text: raw.to_owned(),
            };
        }
    };

    match RecipeSuggestions::deserialize(&value) {
        Ok(suggestions) => SuggestionResult::Structured(suggestions),
        Err(e) => {
            debug!("Model reply does not follow the recipe schema: {e}");
            SuggestionResult::Unvalidated(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"{
        "recipes": [
            {
                "name": "Salada Caprese",
                "ingredients": ["Tomate", "Queijo Mussarela"],
                "steps": ["Fatie", "Monte", "Tempere"],
                "vegan": "Use queijo vegano",
                "gluten_free": true
            }
        ],
        "substitutions": {"Queijo Mussarela": "Queijo Vegano"}
    }"#;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  plain  "), "plain");
    }

    #[test]
    fn test_parse_structured_reply() {
        let result = parse_suggestion(REPLY);
        let SuggestionResult::Structured(suggestions) = result else {
            panic!("expected structured result");
        };
        assert_eq!(suggestions.recipes.len(), 1);
        assert_eq!(suggestions.recipes[0].steps.len(), 3);
        assert_eq!(
            suggestions.substitutions["Queijo Mussarela"],
            "Queijo Vegano"
        );
    }

    #[test]
    fn test_parse_fenced_reply() {
        let fenced = format!("```json\n{REPLY}\n```");
        assert_eq!(parse_suggestion(&fenced).kind(), "structured");
    }

    #[test]
    fn test_non_json_reply_is_raw_text() {
        let result = parse_suggestion("Aqui estão algumas receitas...");
        assert_eq!(
            result,
            SuggestionResult::RawText {
                text: "Aqui estão algumas receitas...".to_owned()
            }
        );
    }

    #[test]
    fn test_json_off_schema_keeps_parsed_document() {
        let raw = r#"{"ideas": ["sopa"]}"#;
        assert_eq!(
            parse_suggestion(raw),
            SuggestionResult::Unvalidated(serde_json::json!({"ideas": ["sopa"]}))
        );
    }

    #[test]
    fn test_object_ingredients_keep_parsed_document() {
        let raw = "```json\n{\"recipes\":[{\"name\":\"Sopa\",\"ingredients\":[{\"item\":\"Tomate\",\"qty\":\"2\"}],\"steps\":[\"Cozinhe\",\"Sirva\"]}],\"substitutions\":{}}\n```";
        let result = parse_suggestion(raw);
        assert_eq!(result.kind(), "unvalidated");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["recipes"][0]["ingredients"][0]["item"], "Tomate");
        assert_eq!(json["recipes"][0]["steps"][1], "Sirva");
        assert!(json.get("text").is_none());
    }

    #[test]
    fn test_localized_keys_keep_parsed_document() {
        let raw = r#"{"recipes":[{"nome":"Sopa","ingredientes":["Tomate"],"passos":["Cozinhe"]}],"substitutions":{"Tomate":"Pimentão"}}"#;
        let result = parse_suggestion(raw);

        let expected: Value = serde_json::from_str(raw).unwrap();
        assert_eq!(result, SuggestionResult::Unvalidated(expected.clone()));
        assert_eq!(serde_json::to_value(&result).unwrap(), expected);
    }

    #[test]
    fn test_json_scalar_is_raw_text() {
        assert_eq!(
            parse_suggestion("42"),
            SuggestionResult::RawText {
                text: "42".to_owned()
            }
        );
    }

    #[test]
    fn test_structured_round_trips_extra_keys() {
        let raw = r#"{"recipes":[],"substitutions":{},"notes":"ok"}"#;
        let result = parse_suggestion(raw);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["notes"], "ok");
        assert_eq!(json["recipes"], serde_json::json!([]));
    }

    #[test]
    fn test_raw_text_wire_shape() {
        let json = serde_json::to_value(SuggestionResult::RawText {
            text: "oi".to_owned(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"text": "oi"}));
    }
}
