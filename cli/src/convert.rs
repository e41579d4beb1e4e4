#![deny(missing_docs)]

//! # Convert Command
//!
//! Reads an apiDoc description, converts it and writes the OpenAPI document to
//! stdout or to a file.
//!
//! 1. **Load**: `api_data.js` (registration script) or `api_data.json`.
//! 2. **Configure**: `info` overrides from `--info` file, then flags / env.
//! 3. **Convert & Write**: JSON (default) or YAML.

use crate::error::{CliError, CliResult};
use apidoc_oas_core::{
    build_document, parse_description, ConvertOptions, InfoOverrides, SourceFormat,
};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Output serialization.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 2-space indented JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

/// How to interpret the source file.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// By extension: `.json` is plain JSON, anything else a `define(...)` script.
    #[default]
    Auto,
    /// `api_data.js` registration script.
    Script,
    /// `api_data.json`.
    Json,
}

impl SourceKind {
    fn resolve(self, path: &Path) -> SourceFormat {
        match self {
            SourceKind::Auto => SourceFormat::from_path(path),
            SourceKind::Script => SourceFormat::Script,
            SourceKind::Json => SourceFormat::Json,
        }
    }
}

/// Arguments for the conversion.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Path to the apiDoc output (e.g. apidoc_output/api_data.js).
    pub source: PathBuf,

    /// Destination file. Parent directories are created. Defaults to stdout.
    pub output: Option<PathBuf>,

    /// Overrides `info.title`.
    #[clap(long, env = "APIDOC_OAS_TITLE")]
    pub title: Option<String>,

    /// Overrides `info.version` (otherwise the highest entry version).
    #[clap(long, env = "APIDOC_OAS_VERSION")]
    pub api_version: Option<String>,

    /// Overrides `info.description`.
    #[clap(long, env = "APIDOC_OAS_DESCRIPTION")]
    pub description: Option<String>,

    /// JSON or YAML file with `info` overrides (title, version, contact, ...).
    #[clap(long, value_name = "FILE")]
    pub info: Option<PathBuf>,

    /// Output format.
    #[clap(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Source format.
    #[clap(long, value_enum, default_value_t = SourceKind::Auto)]
    pub source_format: SourceKind,
}

impl ConvertArgs {
    /// Builds conversion options; flag values win over the `--info` file.
    pub fn options(&self) -> CliResult<ConvertOptions> {
        let from_file = match &self.info {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|e| CliError::file("read", path, e))?;
                InfoOverrides::from_yaml_str(&text)?
            }
            None => InfoOverrides::default(),
        };

        let from_flags = InfoOverrides {
            title: self.title.clone(),
            version: self.api_version.clone(),
            description: self.description.clone(),
            ..Default::default()
        };

        Ok(ConvertOptions {
            info: from_file.merge(from_flags),
        })
    }
}

/// Converts the source and returns the serialized document.
pub fn render(args: &ConvertArgs) -> CliResult<String> {
    let text =
        fs::read_to_string(&args.source).map_err(|e| CliError::file("read", &args.source, e))?;
    let format = args.source_format.resolve(&args.source);
    tracing::debug!(source = %args.source.display(), ?format, "loading apiDoc description");

    let description = parse_description(&text, format)?;
    let document = build_document(&description, &args.options()?);

    let rendered = match args.format {
        OutputFormat::Json => document.to_json()?,
        OutputFormat::Yaml => document.to_yaml()?,
    };
    Ok(rendered)
}

/// Executes the conversion, writing to the output file or stdout.
pub fn execute(args: &ConvertArgs) -> CliResult<()> {
    let rendered = render(args)?;

    match &args.output {
        Some(output) => {
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| CliError::file("create", parent, e))?;
            }
            fs::write(output, rendered).map_err(|e| CliError::file("write", output, e))?;
            eprintln!("OpenAPI spec written to {}", output.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", rendered)
                .map_err(|e| CliError::General(format!("Failed to write to stdout: {}", e)))?;
        }
    }

    Ok(())
}
