use std::path::PathBuf;
use clap::{ArgAction, Parser, Subcommand};
use anyhow::{Context, Result};

use facility_sunburst::{FacilitySheet, print_hierarchy_info, dump, DEFAULT_INPUT, DEFAULT_SHEET};
use facility_sunburst::model::ColumnSchema;
use facility_sunburst::visualization::{ChartMeta, generate_page, ChartPage};

#[derive(Parser)]
#[command(name = "facility-sunburst")]
#[command(author, version, about = "Facility spreadsheet to sunburst chart page generator")]
struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Spreadsheet file to read
    #[arg(short, long, default_value = DEFAULT_INPUT, global = true)]
    input: PathBuf,

    /// Worksheet holding the facility records
    #[arg(short, long, default_value = DEFAULT_SHEET, global = true)]
    sheet: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate index.html, style.css and script.js (default)
    Build {
        /// Directory the page files are written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Chart subtitle (default: names the input file)
        #[arg(long)]
        subtitle: Option<String>,
    },

    /// Display a summary of the facility tree
    Info,

    /// Dump the facility tree to a text file for debugging
    Dump {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Dump the node JSON embedded in the page instead of a text tree
        #[arg(long)]
        json: bool,
    },
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    // Diagnostics go to stderr; stdout carries results and dumps
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Build {
        output_dir: PathBuf::from("."),
        title: None,
        subtitle: None,
    });

    // Dumping to stdout keeps stdout free of progress lines
    let quiet = matches!(command, Commands::Dump { output: None, .. });

    let sheet = FacilitySheet::open(&cli.input, &cli.sheet)
        .with_context(|| format!("Failed to load '{}'", cli.input.display()))?;
    if !quiet {
        println!("Loaded '{}' (sheet '{}', {} records)", sheet.file_name(), sheet.sheet_name(), sheet.record_count());
    }

    let columns = ColumnSchema::default();
    let hierarchy = sheet.build_hierarchy(&columns).context("Failed to build facility tree")?;

    match command {
        Commands::Build { output_dir, title, subtitle } => {
            let stats = hierarchy.stats();
            println!(
                "Chart data generated: {} nodes, {} facilities in {} categories",
                stats.total_nodes, stats.leaf_nodes, stats.categories
            );

            let defaults = sheet.default_meta();
            let meta = ChartMeta {
                title: title.unwrap_or(defaults.title),
                subtitle: subtitle.unwrap_or(defaults.subtitle),
            };

            let written = generate_page(&ChartPage::new(&hierarchy, meta), &output_dir)
                .with_context(|| format!("Failed to write page to '{}'", output_dir.display()))?;

            println!("Page generated:");
            for path in written {
                println!("  {}", path.display());
            }
        }

        Commands::Info => {
            print_hierarchy_info(&sheet, &hierarchy);
        }

        Commands::Dump { output, json } => {
            let options = dump::DumpOptions { json };

            match output {
                Some(output_path) => {
                    dump::dump_to_file(&hierarchy, &output_path, &options)?;
                    println!("Dump written to: {}", output_path.display());
                }
                None => print!("{}", dump::dump(&hierarchy, &options)?),
            }
        }
    }

    Ok(())
}
