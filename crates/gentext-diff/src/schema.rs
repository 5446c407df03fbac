//! Output/dataset schema helpers for generated-text fields.
//!
//! Models declare their outputs as a map from field name to a typed field
//! spec. Generated-text outputs may name a `parent` field; when the dataset
//! has that field, its value is the reference text the output is diffed
//! against.

use std::collections::BTreeMap;

use gentext_types::GeneratedTextCandidate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{DiffError, DiffResult};

/// Type name of a single generated string.
pub const GENERATED_TEXT: &str = "GeneratedText";

/// Type name of a list of `[text, score]` candidates.
pub const GENERATED_TEXT_CANDIDATES: &str = "GeneratedTextCandidates";

/// Field types handled by the generated-text display.
pub const SUPPORTED_TYPES: [&str; 2] = [GENERATED_TEXT, GENERATED_TEXT_CANDIDATES];

/// The declared type of one field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Type name, e.g. `"GeneratedText"` or `"TextSegment"`.
    #[serde(rename = "__name__", alias = "type")]
    pub type_name: String,
    /// Name of the dataset field this output should be compared against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl FieldSpec {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Returns `true` if this field is a generated-text output.
    pub fn is_generated_text(&self) -> bool {
        SUPPORTED_TYPES.contains(&self.type_name.as_str())
    }
}

/// Field name to field spec.
pub type Schema = BTreeMap<String, FieldSpec>;

/// Map each generated-text output field to the dataset field holding its
/// reference text.
///
/// Only outputs whose `parent` names a field present in `dataset` appear.
pub fn reference_fields(output: &Schema, dataset: &Schema) -> BTreeMap<String, String> {
    output
        .iter()
        .filter(|(_, spec)| spec.is_generated_text())
        .filter_map(|(name, spec)| {
            let parent = spec.parent.as_ref()?;
            dataset
                .contains_key(parent)
                .then(|| (name.clone(), parent.clone()))
        })
        .collect()
}

/// Returns `true` if any output field is a generated-text output.
pub fn should_display(output: &Schema) -> bool {
    output.values().any(FieldSpec::is_generated_text)
}

/// Decode the generated-text fields of one prediction into candidate lists.
///
/// `GeneratedText` strings become a single unscored candidate;
/// `GeneratedTextCandidates` arrays are decoded as `[text, score]` pairs.
/// Fields of other types, or not in the schema, are skipped.
pub fn normalize_prediction(
    output: &Schema,
    prediction: &Map<String, Value>,
) -> DiffResult<BTreeMap<String, Vec<GeneratedTextCandidate>>> {
    let mut fields = BTreeMap::new();

    for (name, value) in prediction {
        let Some(spec) = output.get(name) else {
            debug!(field = %name, "prediction field not in output schema; skipping");
            continue;
        };
        let candidates = match spec.type_name.as_str() {
            GENERATED_TEXT => {
                let text = value.as_str().ok_or_else(|| DiffError::MalformedPrediction {
                    field: name.clone(),
                    reason: format!("expected a string, got {value}"),
                })?;
                vec![GeneratedTextCandidate::unscored(text)]
            }
            GENERATED_TEXT_CANDIDATES => serde_json::from_value(value.clone()).map_err(|e| {
                DiffError::MalformedPrediction {
                    field: name.clone(),
                    reason: e.to_string(),
                }
            })?,
            _ => continue,
        };
        fields.insert(name.clone(), candidates);
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn output_schema() -> Schema {
        let mut schema = Schema::new();
        schema.insert(
            "output_text".into(),
            FieldSpec::new(GENERATED_TEXT_CANDIDATES).with_parent("target_text"),
        );
        schema.insert(
            "summary".into(),
            FieldSpec::new(GENERATED_TEXT).with_parent("missing"),
        );
        schema.insert("tokens".into(), FieldSpec::new("Tokens"));
        schema
    }

    fn dataset_schema() -> Schema {
        let mut schema = Schema::new();
        schema.insert("source".into(), FieldSpec::new("TextSegment"));
        schema.insert("target_text".into(), FieldSpec::new("TextSegment"));
        schema
    }

    #[test]
    fn reference_fields_require_parent_in_dataset() {
        let refs = reference_fields(&output_schema(), &dataset_schema());
        assert_eq!(refs.len(), 1);
        assert_eq!(refs["output_text"], "target_text");
    }

    #[test]
    fn reference_fields_ignore_other_types() {
        let mut output = Schema::new();
        output.insert("score".into(), FieldSpec::new("Scalar").with_parent("target_text"));
        assert!(reference_fields(&output, &dataset_schema()).is_empty());
    }

    #[test]
    fn should_display_needs_generated_text() {
        assert!(should_display(&output_schema()));
        assert!(!should_display(&dataset_schema()));
    }

    #[test]
    fn schema_from_json() {
        let schema: Schema = serde_json::from_value(json!({
            "output_text": {"__class__": "LitType", "__name__": "GeneratedText", "parent": "target"},
            "probas": {"type": "MulticlassPreds"}
        }))
        .unwrap();
        assert_eq!(schema["output_text"].parent.as_deref(), Some("target"));
        assert!(schema["output_text"].is_generated_text());
        assert_eq!(schema["probas"].type_name, "MulticlassPreds");
    }

    #[test]
    fn normalize_wraps_single_text() {
        let prediction = json!({"summary": "a short summary", "tokens": ["a", "b"]});
        let fields = normalize_prediction(&output_schema(), prediction.as_object().unwrap()).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["summary"], vec![GeneratedTextCandidate::unscored("a short summary")]);
    }

    #[test]
    fn normalize_decodes_candidates() {
        let prediction = json!({"output_text": [["first", -0.5], ["second", null]], "extra": 1});
        let fields = normalize_prediction(&output_schema(), prediction.as_object().unwrap()).unwrap();
        assert_eq!(
            fields["output_text"],
            vec![
                GeneratedTextCandidate::new("first", Some(-0.5)),
                GeneratedTextCandidate::unscored("second"),
            ]
        );
    }

    #[test]
    fn normalize_rejects_malformed_values() {
        let prediction = json!({"summary": 42});
        let err = normalize_prediction(&output_schema(), prediction.as_object().unwrap()).unwrap_err();
        assert!(matches!(err, DiffError::MalformedPrediction { ref field, .. } if field == "summary"));

        let prediction = json!({"output_text": ["not a pair"]});
        assert!(normalize_prediction(&output_schema(), prediction.as_object().unwrap()).is_err());
    }
}
