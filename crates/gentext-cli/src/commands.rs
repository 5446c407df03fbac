use anyhow::{bail, Context};
use colored::{Color, Colorize};
use gentext_diff::{align, tokenize, DiffConfig, GeneratedTextField};
use gentext_types::{GeneratedTextCandidate, OpTag, Opcode};
use serde::Serialize;

use crate::cli::*;
use crate::document::{read_json, FieldDocument, PredictionDocument};
use crate::render::render_field;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let format = cli.format;
    match cli.command {
        Command::Diff(args) => cmd_diff(args, &config, &format),
        Command::Opcodes(args) => cmd_opcodes(args, &config, &format),
        Command::Field(args) => cmd_field(args, &config, &format),
        Command::Predictions(args) => cmd_predictions(args, &config, &format),
        Command::Config(_) => cmd_config(&config, &format),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<DiffConfig> {
    let Some(path) = &cli.config else {
        return Ok(DiffConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = DiffConfig::from_toml_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!(path = %path.display(), mode = %config.default_mode, "loaded config");
    Ok(config)
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", to_json(value)?);
    Ok(())
}

fn highlight(config: &DiffConfig) -> Color {
    Color::from(config.highlight_color.as_str())
}

fn print_field(field: &mut GeneratedTextField, config: &DiffConfig) {
    print!("{}", render_field(&field.view(), highlight(config)));
    if config.show_ratio {
        if let Some(ratio) = field.similarity() {
            println!("{} {:.3}", "similarity:".dimmed(), ratio);
        }
    }
}

fn cmd_diff(args: DiffArgs, config: &DiffConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let mode = args.mode.unwrap_or(config.default_mode);
    let mut field = GeneratedTextField::new(
        "candidate",
        vec![GeneratedTextCandidate::unscored(args.candidate)],
    )
    .with_reference("reference", Some(args.reference))
    .with_mode(mode);

    match format {
        OutputFormat::Json => print_json(&field.text_diff()),
        OutputFormat::Text => {
            print_field(&mut field, config);
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct OpcodeRow {
    #[serde(flatten)]
    opcode: Opcode,
    a: String,
    b: String,
}

fn cmd_opcodes(args: OpcodesArgs, config: &DiffConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let mode = args.mode.unwrap_or(config.default_mode);
    let Some(sep) = mode.separator() else {
        bail!("mode {mode} does not align; use word or character");
    };
    let a = tokenize(&args.a, mode);
    let b = tokenize(&args.b, mode);
    let rows: Vec<OpcodeRow> = align(&a, &b)
        .into_iter()
        .map(|opcode| OpcodeRow {
            a: a[opcode.a_range()].join(sep),
            b: b[opcode.b_range()].join(sep),
            opcode,
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Text => {
            for row in &rows {
                let tag = match row.opcode.tag {
                    OpTag::Equal => row.opcode.to_string().normal(),
                    OpTag::Replace => row.opcode.to_string().yellow(),
                    OpTag::Delete => row.opcode.to_string().red(),
                    OpTag::Insert => row.opcode.to_string().green(),
                };
                println!("{tag}  {:?} -> {:?}", row.a, row.b);
            }
            Ok(())
        }
    }
}

fn cmd_field(args: FieldArgs, config: &DiffConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let doc: FieldDocument = read_json(&args.path)?;
    let mut field = doc.into_field(args.mode, config.default_mode)?;
    if let Some(index) = args.select {
        field.select(index)?;
    }

    match format {
        OutputFormat::Json => print_json(&field.view()),
        OutputFormat::Text => {
            print_field(&mut field, config);
            Ok(())
        }
    }
}

fn cmd_predictions(
    args: PredictionsArgs,
    config: &DiffConfig,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let doc: PredictionDocument = read_json(&args.path)?;
    let mode = args.mode.unwrap_or(config.default_mode);
    let mut fields = doc.into_fields(mode)?;

    match format {
        OutputFormat::Json => {
            println!("{}", predictions_json(&mut fields)?);
            Ok(())
        }
        OutputFormat::Text if fields.is_empty() => {
            println!("No generated-text outputs.");
            Ok(())
        }
        OutputFormat::Text => {
            for field in &mut fields {
                print_field(field, config);
                println!();
            }
            Ok(())
        }
    }
}

/// JSON array of field views; `[]` when there are no generated-text outputs.
fn predictions_json(fields: &mut [GeneratedTextField]) -> anyhow::Result<String> {
    let views: Vec<_> = fields.iter_mut().map(GeneratedTextField::view).collect();
    to_json(&views)
}

fn cmd_config(config: &DiffConfig, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(config),
        OutputFormat::Text => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use gentext_types::DiffMode;

    #[test]
    fn default_config_without_flag() {
        let cli = Cli::try_parse_from(["gentext", "config"]).unwrap();
        assert_eq!(load_config(&cli).unwrap(), DiffConfig::default());
    }

    #[test]
    fn config_loaded_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gentext.toml");
        std::fs::write(&path, "default_mode = \"Character\"\nhighlight_color = \"red\"\n").unwrap();
        let cli = Cli::try_parse_from(["gentext", "--config", path.to_str().unwrap(), "config"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.default_mode, DiffMode::Character);
        assert_eq!(highlight(&config), Color::Red);
    }

    #[test]
    fn invalid_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gentext.toml");
        std::fs::write(&path, "show_ratio = \"yes\"").unwrap();
        let cli = Cli::try_parse_from(["gentext", "--config", path.to_str().unwrap(), "config"]).unwrap();
        let err = load_config(&cli).unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }

    #[test]
    fn opcodes_reject_none_mode() {
        let cli = Cli::try_parse_from(["gentext", "opcodes", "a", "b", "--mode", "none"]).unwrap();
        assert!(run_command(cli).is_err());
    }

    #[test]
    fn field_command_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("field.json");
        std::fs::write(
            &path,
            r#"{"field_name": "out", "reference_field_name": "target",
                "reference_text": "the cat sat",
                "candidates": [["the dog sat", -0.3], ["the cat sat", -1.0]]}"#,
        )
        .unwrap();
        let cli = Cli::try_parse_from(["gentext", "field", path.to_str().unwrap(), "-s", "1"]).unwrap();
        assert!(run_command(cli).is_ok());

        let cli = Cli::try_parse_from(["gentext", "field", path.to_str().unwrap(), "-s", "9"]).unwrap();
        assert!(run_command(cli).is_err());
    }

    fn write_predictions(dir: &tempfile::TempDir, output_type: &str) -> std::path::PathBuf {
        let path = dir.path().join("predictions.json");
        let doc = serde_json::json!({
            "output_spec": {"output": {"__name__": output_type, "parent": "target"}},
            "dataset_spec": {"target": {"__name__": "TextSegment"}},
            "example": {"target": "the cat sat"},
            "prediction": {"output": "the dog sat"}
        });
        std::fs::write(&path, doc.to_string()).unwrap();
        path
    }

    #[test]
    fn predictions_json_without_generated_text_is_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_predictions(&dir, "Scalar");
        let doc: PredictionDocument = read_json(&path).unwrap();
        let mut fields = doc.into_fields(DiffMode::Word).unwrap();
        assert!(fields.is_empty());
        let json: serde_json::Value =
            serde_json::from_str(&predictions_json(&mut fields).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!([]));

        let cli = Cli::try_parse_from(["gentext", "--format", "json", "predictions", path.to_str().unwrap()])
            .unwrap();
        assert!(run_command(cli).is_ok());
    }

    #[test]
    fn predictions_json_lists_field_views() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_predictions(&dir, "GeneratedText");
        let doc: PredictionDocument = read_json(&path).unwrap();
        let mut fields = doc.into_fields(DiffMode::Word).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&predictions_json(&mut fields).unwrap()).unwrap();
        let views = json.as_array().unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0]["field_name"], "output");
        assert_eq!(views[0]["reference"]["field_name"], "target");
    }
}
