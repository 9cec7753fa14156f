//! `rw transform` command implementation.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use rw_config::{CliSettings, Config};
use rw_mdast::Node;
use rw_transforms::{FailurePolicy, Pipeline, RunReport};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the transform command.
#[derive(Args)]
pub(crate) struct TransformArgs {
    /// Input mdast JSON file (default: stdin, also `-`).
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover rw.toml).
    #[arg(short, long, env = "RW_CONFIG")]
    config: Option<PathBuf>,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pretty: bool,

    /// Stop at the first transform that reports a failure.
    #[arg(long)]
    fail_fast: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl TransformArgs {
    /// Execute the transform command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, I/O or JSON handling fails, or if a
    /// transform fails under `--fail-fast`.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            on_error: self.fail_fast.then_some(FailurePolicy::Abort),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        let source = read_input(self.input.as_deref())?;
        let pipeline = Pipeline::from_config(config.pipeline);
        let (json, report) = transform_document(&source, &pipeline, self.pretty)?;

        for err in &report.failures {
            for failure in err.failures() {
                output.warning(&format!("Warning: {failure}"));
            }
        }

        match &self.output {
            Some(path) => {
                std::fs::write(path, json + "\n")?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{json}")?;
            }
        }

        Ok(())
    }
}

/// Read the document from `input`, or stdin when absent or `-`.
fn read_input(input: Option<&Path>) -> Result<String, CliError> {
    match input {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Parse an mdast JSON document, run `pipeline` and serialize the result.
fn transform_document(
    source: &str,
    pipeline: &Pipeline,
    pretty: bool,
) -> Result<(String, RunReport), CliError> {
    let mut tree: Node = serde_json::from_str(source)?;
    let report = pipeline.run(&mut tree)?;

    let json = if pretty {
        serde_json::to_string_pretty(&tree)?
    } else {
        serde_json::to_string(&tree)?
    };
    Ok((json, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rw_transforms::PipelineConfig;
    use serde_json::{Value, json};

    fn run(document: &Value, policy: FailurePolicy) -> Result<(Value, RunReport), CliError> {
        let pipeline = Pipeline::from_config(PipelineConfig::default()).with_policy(policy);
        let (out, report) = transform_document(&document.to_string(), &pipeline, false)?;
        Ok((serde_json::from_str(&out).unwrap(), report))
    }

    #[test]
    fn test_embed_document() {
        let document = json!({
            "type": "root",
            "children": [{
                "type": "leafDirective",
                "name": "embed",
                "attributes": { "id": "abc123" },
                "children": [{ "type": "text", "value": "youtube" }]
            }]
        });

        let (out, report) = run(&document, FailurePolicy::Collect).unwrap();

        assert!(report.is_clean());
        let frame = &out["children"][0];
        assert_eq!(frame["type"], "element");
        assert_eq!(frame["tagName"], "iframe");
        assert_eq!(
            frame["properties"]["src"],
            "https://www.youtube.com/embed/abc123"
        );
        assert_eq!(frame["properties"]["allowFullScreen"], true);
    }

    #[test]
    fn test_embed_inside_list_item() {
        let document = json!({
            "type": "root",
            "children": [
                {"type": "list", "ordered": false, "spread": false, "children": [
                    {"type": "listItem", "spread": false, "children": [
                        {"type": "paragraph", "children": [
                            {"type": "text", "value": "Watch "},
                            {"type": "image", "url": "thumb.png", "alt": "thumb"}
                        ]},
                        {
                            "type": "leafDirective",
                            "name": "embed",
                            "attributes": { "id": "nested" },
                            "children": [{ "type": "text", "value": "vimeo" }]
                        }
                    ]}
                ]},
                {
                    "type": "leafDirective",
                    "name": "embed",
                    "attributes": { "id": "abc123" },
                    "children": [{ "type": "text", "value": "youtube" }]
                },
                {"type": "code", "lang": "rust", "meta": "title=a.rs", "value": "fn main() {}"}
            ]
        });

        let (out, report) = run(&document, FailurePolicy::Collect).unwrap();

        assert!(report.is_clean());
        let item = &out["children"][0]["children"][0];
        assert_eq!(item["type"], "listItem");
        assert_eq!(item["children"][0]["children"][1]["alt"], "thumb");
        assert_eq!(
            item["children"][1]["properties"]["src"],
            "https://player.vimeo.com/video/nested"
        );
        assert_eq!(out["children"][1]["tagName"], "iframe");
        assert_eq!(out["children"][2]["meta"], "title=a.rs");
    }

    #[test]
    fn test_heading_ids_in_output() {
        let document = json!({
            "type": "root",
            "children": [{
                "type": "heading",
                "depth": 2,
                "children": [{ "type": "text", "value": "Getting Started!" }]
            }]
        });

        let (out, _) = run(&document, FailurePolicy::Collect).unwrap();

        let data = &out["children"][0]["data"];
        assert_eq!(data["id"], "getting-started");
        assert_eq!(data["hProperties"]["id"], "getting-started");
    }

    #[test]
    fn test_collect_reports_invalid_url() {
        let document = json!({
            "type": "root",
            "children": [{
                "type": "leafDirective",
                "name": "link-preview",
                "attributes": { "url": "not a url" },
                "children": []
            }]
        });

        let (out, report) = run(&document, FailurePolicy::Collect).unwrap();

        assert_eq!(report.failure_count(), 1);
        assert_eq!(out["children"][0]["type"], "leafDirective");
    }

    #[test]
    fn test_abort_fails() {
        let document = json!({
            "type": "root",
            "children": [{
                "type": "leafDirective",
                "name": "link-preview",
                "attributes": {},
                "children": []
            }]
        });

        let err = run(&document, FailurePolicy::Abort).unwrap_err();
        assert!(matches!(err, CliError::Transform(_)), "got {err:?}");
    }

    #[test]
    fn test_invalid_json() {
        let pipeline = Pipeline::new();
        let err = transform_document("{", &pipeline, false).unwrap_err();
        assert!(matches!(err, CliError::Json(_)), "got {err:?}");
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let pipeline = Pipeline::new();
        let (out, _) =
            transform_document(r#"{"type":"root","children":[]}"#, &pipeline, true).unwrap();

        assert_eq!(out, "{\n  \"type\": \"root\",\n  \"children\": []\n}");
    }
}
