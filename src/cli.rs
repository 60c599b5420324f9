// CLI module - command-line argument parsing and handlers
//
// Batch host for the layout engine: import a zone file, run one grid
// operation, export the result. Nobody is prompted; confirmations are
// declined.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::{editor_config, Config, HeadlessInteraction, LogFormat, ZoneEditor, VERSION};

/// ZoneKit - zone layout editor for scanned forms
#[derive(Parser, Debug)]
#[command(name = "zonekit")]
#[command(version = VERSION)]
#[command(about = "Generate and inspect zone layouts for scanned forms", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (.toml or .json); defaults to the user config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the DNI digit matrix from D00, D10 and D01
    Matrix(GridArgs),
    /// Generate the simple answer grid from 1A, 1B, 1C and 2A
    Answers {
        #[command(flatten)]
        files: GridArgs,

        /// Number of questions (defaults to the configured count)
        #[arg(long)]
        questions: Option<String>,
    },
    /// Generate the segmented answer grid from per-group anchors
    Segmented(GridArgs),
    /// Print the zones of a file
    List {
        /// Zone file to read
        input: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct GridArgs {
    /// Zone file holding the anchors
    pub input: PathBuf,

    /// Where to write the result; stdout when omitted
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn log_format(&self) -> LogFormat {
        if self.log_json {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Runs the parsed command.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load settings")?;
    tracing::debug!("Settings: {:?}", config);
    let mut editor = ZoneEditor::new(editor_config(&config), HeadlessInteraction);

    match cli.command {
        Commands::Matrix(files) => {
            load(&mut editor, &files.input)?;
            editor.generate_matrix_grid()?;
            export(&editor, files.output.as_deref())
        }
        Commands::Answers { files, questions } => {
            load(&mut editor, &files.input)?;
            editor.generate_answer_grid(questions.as_deref())?;
            export(&editor, files.output.as_deref())
        }
        Commands::Segmented(files) => {
            load(&mut editor, &files.input)?;
            editor.generate_segmented_grid()?;
            export(&editor, files.output.as_deref())
        }
        Commands::List { input } => {
            load(&mut editor, &input)?;
            for zone in editor.registry().iter() {
                println!("{}", zone);
            }
            Ok(())
        }
    }
}

fn load(editor: &mut ZoneEditor, path: &Path) -> anyhow::Result<()> {
    editor
        .load_from_file(path)
        .with_context(|| format!("Failed to import {}", path.display()))?;
    Ok(())
}

fn export(editor: &ZoneEditor, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => editor
            .save_to_file(path)
            .with_context(|| format!("Failed to export {}", path.display())),
        None => {
            println!("{}", editor.export_json()?);
            Ok(())
        }
    }
}
