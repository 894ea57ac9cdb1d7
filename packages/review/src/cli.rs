//! Command-line interface for the review tool.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{validate_input_path, validate_output_dir};
use crate::error::{Diagnostic, Result};
use crate::output::{annotations_yaml, regulation_yaml, save_artifact};
use crate::pipeline::{convert, parse_regulation};
use crate::review::ReviewSession;
use crate::segment::{SegmentOptions, SequencePolicy};

/// RegelRecht Review - Turn archived regulation pages into clause review documents.
#[derive(Parser)]
#[command(name = "regelrecht-review")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an archived regulation page (.mhtml) into a review artifact.
    Convert {
        /// Archived page saved from law.moea.gov.tw
        input: PathBuf,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        segment: SegmentArgs,
    },

    /// Print the extracted metadata and clauses as YAML.
    Inspect {
        /// Archived page saved from law.moea.gov.tw
        input: PathBuf,

        #[command(flatten)]
        segment: SegmentArgs,
    },

    /// Print the annotations stored in a review artifact as YAML.
    Annotations {
        /// Review artifact (.html) exported by a reviewer
        artifact: PathBuf,
    },
}

/// Clause segmentation flags.
#[derive(Args, Debug, Clone)]
pub struct SegmentArgs {
    /// Id of the element holding the regulation body
    #[arg(long)]
    pub container_id: Option<String>,

    /// Minimum clause length in characters
    #[arg(long)]
    pub min_chars: Option<usize>,

    /// Report markers whose numbering is out of sequence
    #[arg(long)]
    pub strict_sequence: bool,
}

impl SegmentArgs {
    /// Build segmentation options, falling back to defaults.
    pub fn to_options(&self) -> SegmentOptions {
        let mut options = SegmentOptions::default();
        if let Some(id) = &self.container_id {
            options = options.with_container_id(id.clone());
        }
        if let Some(min_chars) = self.min_chars {
            options = options.with_min_chars(min_chars);
        }
        if self.strict_sequence {
            options = options.with_policy(SequencePolicy::Reported);
        }
        options
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            segment,
        } => convert_command(&input, output.as_deref(), &segment.to_options()),
        Commands::Inspect { input, segment } => inspect_command(&input, &segment.to_options()),
        Commands::Annotations { artifact } => annotations_command(&artifact),
    }
}

/// Execute the convert command.
fn convert_command(input: &Path, output: Option<&Path>, options: &SegmentOptions) -> Result<()> {
    validate_input_path(input)?;
    if let Some(output_dir) = output {
        validate_output_dir(output_dir)?;
    }

    println!(
        "{} {}",
        style("Converting").bold(),
        style(input.display()).cyan()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Decoding archive...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let raw = match fs::read(input) {
        Ok(raw) => raw,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };

    let conversion = match convert(&raw, options) {
        Ok(conversion) => conversion,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Saving artifact...");
    let output_path = match save_artifact(&conversion.artifact, output) {
        Ok(path) => path,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    pb.finish_and_clear();

    let regulation = &conversion.regulation;
    println!("  Title: {}", style(&regulation.metadata.title).green());
    println!("  Clauses: {}", regulation.clauses.len());
    print_diagnostics(&regulation.diagnostics);

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_path.display()
    );

    Ok(())
}

/// Execute the inspect command.
fn inspect_command(input: &Path, options: &SegmentOptions) -> Result<()> {
    validate_input_path(input)?;
    let raw = fs::read(input)?;
    let regulation = parse_regulation(&raw, options)?;
    print!("{}", regulation_yaml(&regulation)?);
    Ok(())
}

/// Execute the annotations command.
fn annotations_command(artifact: &Path) -> Result<()> {
    let markup = fs::read_to_string(artifact)?;
    let session = ReviewSession::from_html(&markup)?;
    print!("{}", annotations_yaml(&session.document())?);
    Ok(())
}

fn print_diagnostics(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    println!("  Warnings: {}", style(diagnostics.len()).yellow().bold());
    for diagnostic in diagnostics {
        println!("    - {diagnostic}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_convert() {
        let cli = Cli::parse_from(["regelrecht-review", "convert", "law.mhtml"]);

        let Commands::Convert {
            input,
            output,
            segment,
        } = cli.command
        else {
            panic!("expected convert command");
        };
        assert_eq!(input, PathBuf::from("law.mhtml"));
        assert!(output.is_none());
        assert_eq!(segment.to_options(), SegmentOptions::default());
    }

    #[test]
    fn test_cli_parse_segment_flags() {
        let cli = Cli::parse_from([
            "regelrecht-review",
            "inspect",
            "law.mhtml",
            "--container-id",
            "content",
            "--min-chars",
            "4",
            "--strict-sequence",
        ]);

        let Commands::Inspect { segment, .. } = cli.command else {
            panic!("expected inspect command");
        };
        let options = segment.to_options();
        assert_eq!(options.container_id, "content");
        assert_eq!(options.min_chars, 4);
        assert_eq!(options.policy, SequencePolicy::Reported);
    }

    #[test]
    fn test_cli_parse_annotations() {
        let cli = Cli::parse_from(["regelrecht-review", "annotations", "電業法.html"]);
        assert!(matches!(cli.command, Commands::Annotations { .. }));
    }
}
