//! epubzip - Convert EPUB books into browsable zip archives

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use epubzip::{
    BookOutline, ConversionProgress, ConversionSummary, ConvertConfig, Converter, Error,
    validate_source_name,
};

#[derive(Parser)]
#[command(name = "epubzip")]
#[command(version, about = "Convert EPUB books into browsable zip archives", long_about = None)]
#[command(after_help = "EXAMPLES:
    epubzip book.epub                 Write book.zip next to the input
    epubzip book.epub -o out.zip      Write to an explicit path
    epubzip --info book.epub          Show pages and table of contents")]
struct Cli {
    /// Input file (EPUB)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (defaults to INPUT with a .zip extension)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Bundle the placeholder script instead of downloading it
    #[arg(long)]
    offline: bool,

    /// Transform entries on a single thread
    #[arg(long)]
    sequential: bool,

    /// Deflate level for the output archive (1-9)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=9))]
    compression_level: Option<u32>,

    /// Show pages and table of contents without converting
    #[arg(short, long)]
    info: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a Path,
    output: &'a Path,
    summary: &'a ConversionSummary,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let result = if cli.info {
        show_info(&cli)
    } else {
        convert(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn converter(cli: &Cli) -> Converter {
    let mut config = ConvertConfig::default().with_parallel(!cli.sequential);
    if let Some(level) = cli.compression_level {
        config = config.with_compression_level(level);
    }
    if cli.offline {
        Converter::offline().with_config(config.offline())
    } else {
        Converter::new().with_config(config)
    }
}

fn read_input(path: &Path) -> Result<(Vec<u8>, String), Error> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    validate_source_name(&name)?;
    let data = std::fs::read(path)?;
    Ok((data, name))
}

fn show_info(cli: &Cli) -> Result<(), Error> {
    let (data, _) = read_input(&cli.input)?;
    let outline = converter(cli).outline(&data)?;

    if cli.json {
        print_json(&outline);
        return Ok(());
    }

    print_outline(&cli.input, &outline);
    Ok(())
}

fn print_outline(path: &Path, outline: &BookOutline) {
    println!("File: {}", path.display());
    println!("Entries: {}", outline.entries);
    println!("Pages: {}", outline.page_paths.len());
    for (i, page) in outline.page_paths.iter().enumerate() {
        println!("  {:>4}  {page}", i + 1);
    }
    println!("TOC entries: {}", outline.toc.len());
    for entry in &outline.toc {
        let marker = if entry.is_resolved(&outline.page_paths) {
            ""
        } else {
            "  (missing)"
        };
        println!("  {} -> {}{marker}", entry.label, entry.resolved_path);
    }
}

fn convert(cli: &Cli) -> Result<(), Error> {
    let (data, name) = read_input(&cli.input)?;

    let show_progress = !cli.quiet && !cli.json;
    let mut on_progress = |p: ConversionProgress| {
        if !show_progress {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = write!(stderr, "\r{:>3}% {:<32}", p.percent, p.phase.label());
        let _ = stderr.flush();
    };

    let archive = converter(cli).convert(&data, &name, &mut on_progress)?;
    if show_progress {
        eprintln!();
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_file_name(&archive.name));
    std::fs::write(&output, &archive.bytes)?;

    if cli.json {
        print_json(&Report {
            input: &cli.input,
            output: &output,
            summary: &archive.summary,
        });
    } else if !cli.quiet {
        let summary = &archive.summary;
        println!(
            "{} -> {} ({} pages, {} TOC entries, {} files)",
            cli.input.display(),
            output.display(),
            summary.pages,
            summary.toc_entries,
            summary.entries
        );
        if summary.dangling_toc_entries > 0 {
            println!(
                "warning: {} TOC entries do not match any page",
                summary.dangling_toc_entries
            );
        }
        if !summary.script_fetched {
            println!("warning: script download failed, bundled a placeholder");
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("error: {e}"),
    }
}
