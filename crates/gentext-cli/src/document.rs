//! JSON input documents accepted by the `field` and `predictions` commands.

use std::path::Path;

use anyhow::Context;
use gentext_diff::{
    normalize_prediction, reference_fields, should_display, GeneratedTextField, Schema,
};
use gentext_types::{DiffMode, GeneratedTextCandidate};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A single generated-text field with its candidates and reference.
#[derive(Debug, Deserialize)]
pub struct FieldDocument {
    pub field_name: String,
    #[serde(default)]
    pub reference_field_name: Option<String>,
    #[serde(default)]
    pub reference_text: Option<String>,
    pub candidates: Vec<GeneratedTextCandidate>,
    #[serde(default)]
    pub selected: usize,
    #[serde(default)]
    pub mode: Option<DiffMode>,
}

impl FieldDocument {
    /// Build the field view model. `mode` overrides the document's mode,
    /// which overrides `default_mode`.
    pub fn into_field(
        self,
        mode: Option<DiffMode>,
        default_mode: DiffMode,
    ) -> anyhow::Result<GeneratedTextField> {
        let mode = mode.or(self.mode).unwrap_or(default_mode);
        let mut field = GeneratedTextField::new(self.field_name, self.candidates).with_mode(mode);
        if let Some(name) = self.reference_field_name {
            field = field.with_reference(name, self.reference_text);
        }
        if !field.candidates().is_empty() {
            field.select(self.selected)?;
        }
        Ok(field)
    }
}

/// One model prediction for one dataset example, with both schemas.
#[derive(Debug, Deserialize)]
pub struct PredictionDocument {
    pub output_spec: Schema,
    pub dataset_spec: Schema,
    pub example: Map<String, Value>,
    pub prediction: Map<String, Value>,
}

impl PredictionDocument {
    /// One field view model per generated-text output, with reference text
    /// taken from the example when the output has a reference field.
    pub fn into_fields(self, mode: DiffMode) -> anyhow::Result<Vec<GeneratedTextField>> {
        if !should_display(&self.output_spec) {
            return Ok(Vec::new());
        }
        let references = reference_fields(&self.output_spec, &self.dataset_spec);
        let outputs = normalize_prediction(&self.output_spec, &self.prediction)?;

        let fields = outputs
            .into_iter()
            .map(|(name, candidates)| {
                let reference = references.get(&name).cloned();
                let mut field = GeneratedTextField::new(name, candidates).with_mode(mode);
                if let Some(parent) = reference {
                    let text = self
                        .example
                        .get(&parent)
                        .and_then(Value::as_str)
                        .map(str::to_owned);
                    field = field.with_reference(parent, text);
                }
                field
            })
            .collect();
        Ok(fields)
    }
}

/// Read and parse a JSON document from `path`.
pub fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}
