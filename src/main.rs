use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use codexport::export::read_document;
use codexport::{ExportConfig, Exporter, OutputCompression, SectionKind};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Export the tables of a Call of Duty data-request page to CSV and Parquet"
)]
struct Args {
    /// The HTML document to read.
    #[arg(long)]
    input: PathBuf,
    /// Directory for CSV output.
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Directory for Parquet output.
    #[arg(long)]
    parquet: Option<PathBuf>,
    /// Sections to export (default: all).
    #[arg(long, value_enum, value_delimiter = ',')]
    sections: Vec<SectionKind>,
    #[arg(long, value_enum, default_value_t = OutputCompression::Uncompressed)]
    compression: OutputCompression,
}

impl Args {
    fn into_config(self) -> ExportConfig {
        let sections = if self.sections.is_empty() {
            SectionKind::ALL.to_vec()
        } else {
            self.sections
        };
        ExportConfig {
            csv_dir: self.csv,
            parquet_dir: self.parquet,
            sections,
            compression: self.compression,
        }
    }
}

fn main() -> ExitCode {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("export failed");
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let document = read_document(&args.input)?;
    info!(path = %args.input.display(), "parsed input");

    let summary = Exporter::new(args.into_config()).run(&document)?;
    for report in &summary.sections {
        info!(
            section = report.section,
            rows = report.rows,
            files = ?report.files,
            "section exported"
        );
    }
    info!("done");
    Ok(())
}
