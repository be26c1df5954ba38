use crate::api::ContentAnalyzer;
use crate::cli::ContentArgs;
use crate::config::Config;
use crate::export::write_report;
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::info;

pub fn run(args: ContentArgs) -> Result<()> {
    let config = Config::load();
    let options = args.options(&config);
    let format = args.format(&config);

    let progress = ProgressBarBuilder::new(format!("Reading {}", args.input.display()))
        .with_template("{spinner:.green} [{elapsed_precise}] {msg}: {human_pos} reads ({per_sec})")
        .with_tick()
        .build()?;

    let report = ContentAnalyzer::new(options)
        .with_progress(progress.clone())
        .analyze(args.input.as_path())?;

    progress.finish_with_message(format!(
        "Counted {} reads over {} positions",
        report.stats.processed,
        report.table.len()
    ));

    let source = args.input.display().to_string();
    match &args.output {
        Some(output_path) => {
            let file = File::create(output_path).with_context(|| {
                format!("Failed to create output file {}", output_path.display())
            })?;
            write_report(&report, &source, format, BufWriter::new(file))?;
            info!(path = %output_path.display(), "wrote base content table");
        }
        None => write_report(&report, &source, format, io::stdout().lock())?,
    }

    Ok(())
}
