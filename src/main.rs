// Command-line entry point for commgraph.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use commgraph::application::AnalyzeUsecase;
use commgraph::domain::summary::GraphSummary;
use commgraph::infrastructure::{DotExporter, JsonExporter};
use commgraph::ports::GraphExporter;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Communication graph dumped by mpiP
    graph_file: PathBuf,

    /// Dump the parsed graph to this path
    #[arg(short, long)]
    dump_to: Option<PathBuf>,

    /// Dump format
    #[arg(short, long, value_enum, default_value = "json")]
    format: DumpFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DumpFormat {
    Json,
    Dot,
}

fn run(cli: &Cli) -> anyhow::Result<GraphSummary> {
    let exporter: &dyn GraphExporter = match cli.format {
        DumpFormat::Json => &JsonExporter,
        DumpFormat::Dot => &DotExporter,
    };

    let usecase = AnalyzeUsecase { exporter };
    usecase
        .run(&cli.graph_file, cli.dump_to.as_deref())
        .with_context(|| format!("failed to analyse {}", cli.graph_file.display()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(summary) => {
            println!("{}", summary);
            if let Some(path) = &cli.dump_to {
                println!("Graph dumped to {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
