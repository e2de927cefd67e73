//! chapter-summary — split a PDF into chapter files by page range, then
//! summarize each chapter into one LaTeX document via a chat-completion API.
//!
//! Two subcommands sharing a folder layout:
//! - `chapter-summary split` reads `input/*.pdf` and `chapters.txt` and
//!   writes `output/NN_name.pdf` files.
//! - `chapter-summary summarize` reads `output/*.pdf` and writes
//!   `summary.tex`.

use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use summary_core::manifest;
use summary_core::options::RunOptions;
use summary_latex::document;
use summary_openai::OpenAiClient;
use summary_pdf::{extract, split};

#[derive(Parser)]
#[command(
    name = "chapter-summary",
    version,
    about = "Split a PDF into chapters and summarize them into one LaTeX document"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Folder containing the source PDF
    #[arg(long, global = true)]
    input_dir: Option<PathBuf>,

    /// Folder for chapter PDFs
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Chapter manifest file (lines of `name start_page end_page`)
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    /// File holding the API key
    #[arg(long, global = true)]
    key_file: Option<PathBuf>,

    /// Model identifier for summarization
    #[arg(long, global = true)]
    model: Option<String>,

    /// Chat-completion API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Output LaTeX file
    #[arg(long, global = true)]
    summary_file: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Dump effective merged config as TOML and exit
    #[arg(long, global = true)]
    dump_config: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Split the source PDF into chapter PDFs per the manifest
    Split,
    /// Summarize every chapter PDF into one LaTeX document
    Summarize,
}

/// Load config from global and project-local TOML files.
/// Later files override earlier ones. Missing files are silently ignored.
fn load_config() -> RunOptions {
    let mut opts = RunOptions::default();

    // 1. Global config: ~/.config/chapter-summary/config.toml
    if let Some(config_dir) = dirs::config_dir() {
        let global_path = config_dir.join("chapter-summary").join("config.toml");
        if let Ok(contents) = std::fs::read_to_string(&global_path) {
            match toml::from_str::<RunOptions>(&contents) {
                Ok(parsed) => opts = parsed,
                Err(e) => {
                    log::warn!("Failed to parse {}: {}", global_path.display(), e);
                }
            }
        }
    }

    // 2. Project-local config: ./chapter-summary.toml
    let local_path = PathBuf::from("chapter-summary.toml");
    if let Ok(contents) = std::fs::read_to_string(&local_path) {
        match toml::from_str::<RunOptions>(&contents) {
            Ok(parsed) => opts = parsed,
            Err(e) => {
                log::warn!("Failed to parse {}: {}", local_path.display(), e);
            }
        }
    }

    opts
}

/// Apply CLI flags on top of config-loaded options.
fn apply_cli_overrides(opts: &mut RunOptions, cli: &Cli) {
    if let Some(ref dir) = cli.input_dir {
        opts.input_dir = dir.clone();
    }
    if let Some(ref dir) = cli.output_dir {
        opts.output_dir = dir.clone();
    }
    if let Some(ref path) = cli.manifest {
        opts.manifest = path.clone();
    }
    if let Some(ref path) = cli.key_file {
        opts.key_file = path.clone();
    }
    if let Some(ref model) = cli.model {
        opts.model = model.clone();
    }
    if let Some(ref url) = cli.base_url {
        opts.base_url = url.clone();
    }
    if let Some(ref path) = cli.summary_file {
        opts.summary_file = path.clone();
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut options = load_config();
    apply_cli_overrides(&mut options, &cli);

    // Handle --dump-config
    if cli.dump_config {
        match toml::to_string_pretty(&options) {
            Ok(s) => {
                println!("{}", s);
                process::exit(0);
            }
            Err(e) => {
                eprintln!("Error serializing config: {}", e);
                process::exit(1);
            }
        }
    }

    let result = match cli.command {
        Commands::Split => run_split(&options),
        Commands::Summarize => run_summarize(&options),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run_split(options: &RunOptions) -> Result<()> {
    let input_pdf = summary_pdf::find_input_pdf(&options.input_dir)?;
    let entries = manifest::load_manifest(&options.manifest)?;

    // Recreate the output folder from scratch so stale chapters from a
    // previous manifest never survive
    if options.output_dir.exists() {
        std::fs::remove_dir_all(&options.output_dir)
            .with_context(|| format!("Failed to clear {}", options.output_dir.display()))?;
    }
    std::fs::create_dir_all(&options.output_dir)
        .with_context(|| format!("Failed to create {}", options.output_dir.display()))?;

    log::info!(
        "Splitting {} into {} chapters",
        input_pdf.display(),
        entries.len()
    );
    split::split_chapters(&input_pdf, &entries, &options.output_dir)?;
    Ok(())
}

fn run_summarize(options: &RunOptions) -> Result<()> {
    if !options.output_dir.exists() {
        anyhow::bail!(
            "The output folder {} does not exist. Run `chapter-summary split` first.",
            options.output_dir.display()
        );
    }

    let client = OpenAiClient::from_key_file(
        &options.key_file,
        options.base_url.clone(),
        Duration::from_secs(options.request_timeout_secs),
    )?;

    let pdf_files = list_chapter_pdfs(&options.output_dir)?;
    let pb = create_progress_bar(pdf_files.len() as u64);

    let mut summaries: Vec<(String, String)> = Vec::new();
    for path in &pdf_files {
        let chapter_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        pb.set_message(chapter_name.clone());

        match summarize_chapter(&client, options, path, &chapter_name) {
            Ok(summary) => summaries.push((chapter_name, summary)),
            Err(e) => log::warn!("Skipping {}: {}", chapter_name, e),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let latex = document::assemble(&summaries)?;
    std::fs::write(&options.summary_file, latex)
        .with_context(|| format!("Failed to write {}", options.summary_file.display()))?;
    log::info!("Summary saved to {}", options.summary_file.display());
    Ok(())
}

fn summarize_chapter(
    client: &OpenAiClient,
    options: &RunOptions,
    path: &Path,
    chapter_name: &str,
) -> summary_core::error::Result<String> {
    let text = extract::extract(path)?;
    client.summarize(&options.model, options.temperature, &text, chapter_name)
}

/// Chapter PDFs in sorted file-name order; the zero-padded prefixes make
/// this the manifest order.
fn list_chapter_pdfs(output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut pdf_files: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(output_dir)
        .with_context(|| format!("Failed to read {}", output_dir.display()))?
    {
        let path = entry?.path();
        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf && path.is_file() {
            pdf_files.push(path);
        }
    }
    pdf_files.sort();
    Ok(pdf_files)
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.green} [{bar:40.green/dim}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
