use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use unchurnable::{Classifier, Error, Graph, Graph6Reader, ReportWriter};

/// Lists the graphs outside X ∪ Y whose minimum- and maximum-degree vertex
/// deletions both land in Y.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// graph6 input, one graph per line (`-` for stdin).
    input: PathBuf,

    /// Report destination (stdout when omitted or `-`).
    output: Option<PathBuf>,

    /// Worker threads; 1 classifies sequentially.
    #[arg(short, long, default_value_t = 1)]
    jobs: usize,

    /// Graphs decoded per parallel batch.
    #[arg(long, default_value_t = 4096)]
    batch_size: usize,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let graphs = open_input(&cli.input)?.map(|graph| graph.map_err(Error::from));
    let mut report = ReportWriter::new(open_output(cli.output.as_deref())?);
    let classifier = Classifier::default();

    if cli.jobs > 1 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.jobs)
            .build_global()
            .context("failed to start worker pool")?;
        write_all(&mut report, classifier.par_unchurnable(graphs, cli.batch_size))?;
    } else {
        write_all(&mut report, classifier.unchurnable(graphs))?;
    }

    let written = report.finish().context("failed to flush report")?;
    info!(written, "report written");
    Ok(())
}

fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .try_init();
}

fn open_input(path: &Path) -> Result<Graph6Reader<Box<dyn io::BufRead>>> {
    let reader: Box<dyn io::BufRead> = if path.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        Box::new(BufReader::new(file))
    };
    Ok(Graph6Reader::new(reader))
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let file =
                File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        _ => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Writes graphs as they arrive and stops at the first error.
fn write_all<W: Write>(
    report: &mut ReportWriter<W>,
    graphs: impl Iterator<Item = Result<Graph, Error>>,
) -> Result<()> {
    for graph in graphs {
        let graph = graph.context("classification stopped")?;
        report.write_graph(&graph).context("failed to write report")?;
    }
    Ok(())
}
