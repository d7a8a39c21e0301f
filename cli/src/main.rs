//! summark CLI - summary formatting tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use summark::{format_file, render, Document, JsonFormat, Summark, SummaryView};

#[derive(Parser)]
#[command(name = "summark")]
#[command(version)]
#[command(about = "Format AI-generated summary text into HTML, plain text, and JSON", long_about = None)]
struct Cli {
    /// Input summary text file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a summary to all formats (HTML, text, JSON)
    Convert {
        /// Input summary text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Convert a summary to HTML
    Html {
        /// Input summary text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Heading tag level (1-6)
        #[arg(long, default_value = "4")]
        heading_level: u8,

        /// CSS class of the section container
        #[arg(long, default_value = "summary-section")]
        section_class: String,

        /// Render the raw preformatted view instead of the formatted one
        #[arg(long)]
        raw: bool,
    },

    /// Convert a summary to plain text
    Text {
        /// Input summary text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// List item marker character
        #[arg(long, default_value = "-")]
        marker: char,
    },

    /// Convert a summary to JSON
    Json {
        /// Input summary text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input summary text file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert { input, output }) => cmd_convert(&input, output.as_deref()),
        Some(Commands::Html {
            input,
            output,
            heading_level,
            section_class,
            raw,
        }) => cmd_html(&input, output.as_deref(), heading_level, &section_class, raw),
        Some(Commands::Text {
            input,
            output,
            marker,
        }) => cmd_text(&input, output.as_deref(), marker),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: summark <FILE> [OUTPUT]".yellow());
                println!("       summark --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Reading summary...");
    let result = Summark::new().format_file(input)?;
    pb.inc(1);

    pb.set_message("Generating HTML...");
    let html = result.to_html()?;
    fs::write(output_dir.join("summary.html"), &html)?;
    pb.inc(1);

    pb.set_message("Generating text...");
    let text = result.to_text()?;
    fs::write(output_dir.join("summary.txt"), &text)?;
    pb.inc(1);

    pb.set_message("Generating JSON...");
    let json = result.to_json(JsonFormat::Pretty)?;
    fs::write(output_dir.join("summary.json"), &json)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} summary.html", "├─".dimmed());
    println!("  {} summary.txt", "├─".dimmed());
    println!("  {} summary.json", "└─".dimmed());

    Ok(())
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    heading_level: u8,
    section_class: &str,
    raw: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = Summark::new()
        .heading_level(heading_level)
        .section_class(section_class)
        .format_file(input)?;

    let view = if raw {
        SummaryView::Raw
    } else {
        SummaryView::Formatted
    };
    let html = result.view(view)?;

    write_or_print(output, &html)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    marker: char,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = Summark::new().list_marker(marker).format_file(input)?;
    let text = result.to_text()?;

    write_or_print(output, &text)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = format_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&doc, format)?;

    write_or_print(output, &json)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = format_file(input)?;

    println!("{}", "Summary Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Blocks".bold(), doc.block_count());
    println!("{}: {}", "Headings".bold(), doc.heading_count());
    println!("{}: {}", "Lists".bold(), doc.list_count());
    println!("{}: {}", "List items".bold(), doc.list_item_count());
    println!("{}: {}", "Paragraphs".bold(), doc.paragraph_count());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    print_text_stats(&doc);

    Ok(())
}

fn print_text_stats(doc: &Document) {
    let text = doc.plain_text();
    let words: usize = text.split_whitespace().count();
    let chars = text.chars().count();

    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Characters".bold(), chars);
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "summark".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Summary formatting tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/summark-dev/summark".dimmed()
    );
    println!("License: MIT");
}
