use std::fs;
use std::path::{Path, PathBuf};

use barback_tools::menu::{self, MenuLayout};
use barback_tools::model::MergeReport;
use barback_tools::{Result, ToolError, merge, sample};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;
    match cli.command {
        Command::Merge(args) => execute_merge(args),
        Command::Menu(args) => execute_menu(args),
        Command::Sample(args) => execute_sample(args),
    }
}

fn execute_merge(args: MergeArgs) -> Result<()> {
    let report = merge::merge_workbooks(&args.inputs, &args.output)?;
    if let Some(report_path) = &args.report {
        write_report(report_path, &report)?;
    }
    Ok(())
}

fn execute_menu(args: MenuArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(ToolError::MissingInput(args.input));
    }
    if !args.font.exists() {
        return Err(ToolError::MissingInput(args.font));
    }

    let layout = MenuLayout {
        title: args.title,
        subtitle: args.subtitle,
    };
    menu::markdown_to_pdf(&args.input, &args.output, &args.font, &layout)?;
    Ok(())
}

fn execute_sample(args: SampleArgs) -> Result<()> {
    sample::write_sample_workbooks(&args.dir)?;
    Ok(())
}

fn write_report(path: &Path, report: &MergeReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Back-office utilities: merge spreadsheet exports and render the cocktail menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge workbooks that share a header and renumber the first column.
    Merge(MergeArgs),
    /// Render a Markdown drinks list as a printable PDF menu.
    Menu(MenuArgs),
    /// Write small sample workbooks for trying out the merge command.
    Sample(SampleArgs),
}

#[derive(clap::Args)]
struct MergeArgs {
    /// Output workbook path.
    #[arg(long)]
    output: PathBuf,

    /// Optional path for a JSON summary of the merge.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Input workbooks, merged in the given order.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

#[derive(clap::Args)]
struct MenuArgs {
    /// Markdown menu source.
    #[arg(long)]
    input: PathBuf,

    /// Output PDF path.
    #[arg(long)]
    output: PathBuf,

    /// TTF font to embed; it must cover the menu's glyphs.
    #[arg(long)]
    font: PathBuf,

    /// Main title printed at the top of the menu.
    #[arg(long, default_value = "Signature Cocktails")]
    title: String,

    /// Optional subtitle printed under the main title.
    #[arg(long)]
    subtitle: Option<String>,
}

#[derive(clap::Args)]
struct SampleArgs {
    /// Directory the sample workbooks are written into.
    #[arg(long, default_value = ".")]
    dir: PathBuf,
}
