use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use docindex::artifact::{self, ArtifactFormat};
use docindex::validate;

/// Inspect, validate, and convert documentation search-index artifacts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check an artifact against the index contract
    Validate {
        /// Artifact file (.js or .json)
        file: PathBuf,
        /// Emit the report as JSON instead of human-readable lines
        #[arg(long)]
        json: bool,
    },
    /// Re-encode an artifact between the JSON and script forms
    Convert {
        /// Input artifact file
        input: PathBuf,
        /// Output artifact file
        output: PathBuf,
        /// Output encoding (defaults to what the output extension suggests)
        #[arg(long, value_enum)]
        format: Option<ArtifactFormat>,
        /// Global binding name for the script form
        #[arg(long, default_value = artifact::DEFAULT_VAR_NAME)]
        var_name: String,
        /// Pretty-print the JSON form
        #[arg(long)]
        pretty: bool,
    },
    /// List the records of an artifact
    Show {
        /// Artifact file
        file: PathBuf,
        /// Print at most this many records
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays parseable (e.g. `validate --json`).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    match args.command {
        Commands::Validate { file, json } => validate_artifact(&file, json),
        Commands::Convert {
            input,
            output,
            format,
            var_name,
            pretty,
        } => convert_artifact(&input, &output, format, &var_name, pretty),
        Commands::Show { file, limit } => show_artifact(&file, limit),
    }
}

fn validate_artifact(file: &PathBuf, json: bool) -> Result<()> {
    let parsed = artifact::read_artifact(file)?;
    let report = validate::validate(&parsed.index);

    if json {
        println!("{}", report.to_json());
    } else {
        for issue in &report.issues {
            match issue.severity() {
                validate::Severity::Error => println!("error: {}", issue.describe()),
                validate::Severity::Warning => println!("warning: {}", issue.describe()),
            }
        }
        println!(
            "{}: {} records, {} errors, {} warnings",
            file.display(),
            report.record_count,
            report.error_count(),
            report.warning_count()
        );
    }

    if !report.is_valid() {
        process::exit(1);
    }
    Ok(())
}

fn convert_artifact(
    input: &PathBuf,
    output: &PathBuf,
    format: Option<ArtifactFormat>,
    var_name: &str,
    pretty: bool,
) -> Result<()> {
    let parsed = artifact::read_artifact(input)?;
    let format = format.unwrap_or_else(|| ArtifactFormat::from_path(output));
    let contents = artifact::emit_artifact(&parsed.index, format, var_name, pretty)?;
    artifact::write_artifact(output, &contents)?;
    tracing::info!(
        "wrote {} records to {} ({})",
        parsed.index.len(),
        output.display(),
        format
    );
    Ok(())
}

fn show_artifact(file: &PathBuf, limit: Option<usize>) -> Result<()> {
    let parsed = artifact::read_artifact(file)?;
    let limit = limit.unwrap_or(usize::MAX);
    for record in parsed.index.iter().take(limit) {
        println!("{}\t{}\t{}", record.id, record.title, record.link);
    }
    Ok(())
}
