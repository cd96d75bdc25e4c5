//! # Artifact Module
//!
//! Reading and writing the on-disk forms of the document index.
//!
//! The same record array ships in two encodings: a bare JSON array, or the
//! hosting-script wrapper (`var lunrData = [...];`) that documentation sites
//! load with a `<script>` tag. Both are UTF-8; input may carry a BOM.
//!
//! ## Key Components
//!
//! - [`js`] - The hosting-script wrapper codec
//! - [`parse_artifact`] / [`emit_artifact`] - In-memory codec entry points
//! - [`read_artifact`] / [`write_artifact`] - File-level helpers

pub mod js;

pub use js::DEFAULT_VAR_NAME;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::index::DocumentIndex;

/// The two encodings an artifact ships in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactFormat {
    /// Bare JSON array of records.
    Json,
    /// JSON array assigned to a global script binding.
    #[value(name = "js")]
    JsGlobal,
}

impl ArtifactFormat {
    /// Guess the format from a file extension (`.json` vs `.js`), falling
    /// back to the script form since that is what documentation builds ship.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::Json,
            _ => Self::JsGlobal,
        }
    }
}

impl fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::JsGlobal => write!(f, "js"),
        }
    }
}

/// A loaded artifact: the index plus what was learned about its encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedArtifact {
    pub index: DocumentIndex,
    pub format: ArtifactFormat,
    /// Binding name, when the artifact used the script wrapper.
    pub var_name: Option<String>,
}

/// Sniff which encoding a source is in: a leading `[` means a bare JSON
/// array, anything else is treated as the script wrapper.
pub fn detect_format(source: &str) -> ArtifactFormat {
    let trimmed = source.trim_start_matches('\u{feff}').trim_start();
    if trimmed.starts_with('[') {
        ArtifactFormat::Json
    } else {
        ArtifactFormat::JsGlobal
    }
}

/// Parse an artifact in either encoding into a [`DocumentIndex`].
pub fn parse_artifact(source: &str) -> Result<ParsedArtifact> {
    let format = detect_format(source);
    tracing::debug!("detected {} artifact encoding", format);
    match format {
        ArtifactFormat::Json => {
            let trimmed = source.trim_start_matches('\u{feff}');
            let index = DocumentIndex::from_json(trimmed)?;
            Ok(ParsedArtifact {
                index,
                format,
                var_name: None,
            })
        }
        ArtifactFormat::JsGlobal => {
            let (name, body) = js::parse_global_assignment(source)?;
            let index = DocumentIndex::from_json(body)
                .with_context(|| format!("In array assigned to '{}'", name))?;
            Ok(ParsedArtifact {
                index,
                format,
                var_name: Some(name.to_string()),
            })
        }
    }
}

/// Serialize an index into the requested encoding.
///
/// `pretty` only applies to the JSON form; the script wrapper is always
/// emitted compact, matching what documentation builds write.
pub fn emit_artifact(
    index: &DocumentIndex,
    format: ArtifactFormat,
    var_name: &str,
    pretty: bool,
) -> Result<String> {
    match format {
        ArtifactFormat::Json => {
            let mut json = if pretty {
                index.to_json_pretty()?
            } else {
                index.to_json()?
            };
            json.push('\n');
            Ok(json)
        }
        ArtifactFormat::JsGlobal => js::emit_global_assignment(var_name, &index.to_json()?),
    }
}

/// Load an artifact file.
pub fn read_artifact(path: &Path) -> Result<ParsedArtifact> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read artifact file {}", path.display()))?;
    let parsed = parse_artifact(&source)
        .with_context(|| format!("Failed to parse artifact file {}", path.display()))?;
    tracing::info!(
        "loaded {} records from {} ({})",
        parsed.index.len(),
        path.display(),
        parsed.format
    );
    Ok(parsed)
}

/// Write an already-encoded artifact to disk.
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .with_context(|| format!("Failed to write artifact file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const JS_SAMPLE: &str = concat!(
        r#"var lunrData = [{"id":5277306,"title":"PDF Signer","link":"PDF_Signer.html"},"#,
        r#"{"id":3050406,"title":"SignServer Manual","link":"SignServer_Manual.html"}];"#
    );

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format("[]"), ArtifactFormat::Json);
        assert_eq!(detect_format("  \n[{\"id\":1}]"), ArtifactFormat::Json);
        assert_eq!(detect_format(JS_SAMPLE), ArtifactFormat::JsGlobal);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ArtifactFormat::from_path(Path::new("index.json")),
            ArtifactFormat::Json
        );
        assert_eq!(
            ArtifactFormat::from_path(Path::new("lunr-data.js")),
            ArtifactFormat::JsGlobal
        );
    }

    #[test]
    fn test_parse_js_artifact() -> Result<()> {
        let parsed = parse_artifact(JS_SAMPLE)?;
        assert_eq!(parsed.format, ArtifactFormat::JsGlobal);
        assert_eq!(parsed.var_name.as_deref(), Some("lunrData"));
        assert_eq!(parsed.index.len(), 2);

        let record = parsed.index.get(3050406).unwrap();
        assert_eq!(record.title, "SignServer Manual");
        assert_eq!(record.link, "SignServer_Manual.html");
        Ok(())
    }

    #[test]
    fn test_parse_json_artifact() -> Result<()> {
        let parsed = parse_artifact(r#"[{"id":1,"title":"A","link":"a.html"}]"#)?;
        assert_eq!(parsed.format, ArtifactFormat::Json);
        assert_eq!(parsed.var_name, None);
        assert_eq!(parsed.index.len(), 1);
        Ok(())
    }

    #[test]
    fn test_cross_format_round_trip() -> Result<()> {
        let parsed = parse_artifact(JS_SAMPLE)?;

        let as_json = emit_artifact(&parsed.index, ArtifactFormat::Json, DEFAULT_VAR_NAME, true)?;
        let from_json = parse_artifact(&as_json)?;
        assert_eq!(parsed.index, from_json.index);

        let as_js = emit_artifact(&parsed.index, ArtifactFormat::JsGlobal, "searchData", false)?;
        let from_js = parse_artifact(&as_js)?;
        assert_eq!(parsed.index, from_js.index);
        assert_eq!(from_js.var_name.as_deref(), Some("searchData"));
        Ok(())
    }

    #[test]
    fn test_malformed_body_in_wrapper_fails() {
        // The wrapper is well-formed but the array content is not records.
        assert!(parse_artifact(r#"var lunrData = [{"id":"x"}];"#).is_err());
        assert!(parse_artifact(r#"var lunrData = [1,2,3];"#).is_err());
    }
}
