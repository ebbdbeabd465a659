//! cv-links CLI
//!
//! Prints the profile links found in a folder of resumes (JSON array) or in
//! a single resume (JSON object).

use anyhow::Result;
use clap::Parser;
use cv_links::{logging, render, run_file, run_folder, OutputFormat, PathError};
use std::path::PathBuf;

const USAGE: &str = "Usage: cv-links <folder_path_or_file_path>";

#[derive(Parser)]
#[command(name = "cv-links")]
#[command(version)]
#[command(about = "Extract LinkedIn and GitHub profile links from DOCX/PDF resumes")]
struct Cli {
    /// Folder of resumes, or a single .docx/.pdf file
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Output format: json (default) or yaml
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Json, env = "CV_LINKS_FORMAT")]
    format: OutputFormat,

    /// Single-line JSON instead of 2-space indented
    #[arg(long)]
    compact: bool,

    /// Debug logging on stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let Some(path) = cli.path else {
        println!("{}", USAGE);
        std::process::exit(1);
    };

    let output = if path.is_dir() {
        tracing::info!("Scanning folder {}", path.display());
        render(&run_folder(&path), cli.format, cli.compact)?
    } else if path.is_file() {
        render(&run_file(&path), cli.format, cli.compact)?
    } else {
        render(&PathError::does_not_exist(), cli.format, cli.compact)?
    };

    println!("{}", output);
    Ok(())
}
