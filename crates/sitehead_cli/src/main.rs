use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sitehead_cli::logger::{configure_logger, level_for_verbosity};
use sitehead_cli::site::{build_site, check_site, has_errors, page_head};
use sitehead_core::front_matter::UnknownKeyPolicy;
use sitehead_core::html::render_head;
use sitehead_core::model::Diagnostic;

#[derive(Debug, Parser)]
#[command(name = "sitehead", about = "Resolve page metadata and render document heads.")]
struct Cli {
    #[arg(long = "source-dir", short = 's', global = true)]
    source_dir: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "error", global = true)]
    unknown_header_keys: UnknownHeaderKeys,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum UnknownHeaderKeys {
    Error,
    Warn,
}

impl From<UnknownHeaderKeys> for UnknownKeyPolicy {
    fn from(value: UnknownHeaderKeys) -> Self {
        match value {
            UnknownHeaderKeys::Error => UnknownKeyPolicy::Error,
            UnknownHeaderKeys::Warn => UnknownKeyPolicy::Warn,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Resolve every page and report problems.")]
    Check {
        #[arg(default_value = "pages")]
        pages_dir: PathBuf,
    },
    #[command(about = "Print the document head for one page.")]
    Head {
        page: PathBuf,
        #[arg(long, default_value = "pages")]
        pages_dir: PathBuf,
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Render every page into the output directory.")]
    Build {
        #[arg(default_value = "pages")]
        pages_dir: PathBuf,
        #[arg(long, value_name = "PATH", default_value = "out")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    configure_logger(level_for_verbosity(cli.verbose, cli.quiet));
    let root = root_dir(&cli)?;
    let policy = cli.unknown_header_keys.into();
    match &cli.command {
        Command::Check { pages_dir } => run_check(&root, pages_dir, policy),
        Command::Head {
            page,
            pages_dir,
            json,
        } => run_head(&root, pages_dir, page, *json, policy),
        Command::Build { pages_dir, out } => run_build(&root, pages_dir, out, policy),
    }
}

fn run_check(root: &Path, pages_dir: &Path, policy: UnknownKeyPolicy) -> Result<()> {
    let diagnostics = check_site(root, pages_dir, policy)?;
    print_diagnostics(&diagnostics);
    if has_errors(&diagnostics) {
        std::process::exit(1);
    }
    println!("ok");
    Ok(())
}

fn run_head(
    root: &Path,
    pages_dir: &Path,
    page: &Path,
    json: bool,
    policy: UnknownKeyPolicy,
) -> Result<()> {
    let (entries, diagnostics) = page_head(root, pages_dir, page, policy)?;
    print_diagnostics(&diagnostics);
    if json {
        let out = serde_json::to_string_pretty(&entries).context("failed to serialize head")?;
        println!("{out}");
    } else {
        print!("{}", render_head(&entries));
    }
    Ok(())
}

fn run_build(root: &Path, pages_dir: &Path, out: &Path, policy: UnknownKeyPolicy) -> Result<()> {
    let report = build_site(root, pages_dir, out, policy)?;
    print_diagnostics(&report.diagnostics);
    println!("pages written: {}", report.written.len());
    if report.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}

fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        eprintln!("{diag}");
    }
}

fn root_dir(cli: &Cli) -> Result<PathBuf> {
    match &cli.source_dir {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir().context("failed to resolve current directory"),
    }
}
