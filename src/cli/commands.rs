use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::{AggregationSummary, ParallelProcessor, Report, ReportBuilder};
use crate::readers::InputBuffer;
use crate::utils::constants::DEFAULT_OUTPUT_BUFFER_SIZE;
use crate::utils::progress::ProgressReporter;
use crate::utils::{init_logging, Settings};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Process {
            input_file,
            output_file,
            max_workers,
            table_capacity,
            config,
        } => {
            let settings =
                Settings::load(config.as_deref())?.with_overrides(max_workers, table_capacity)?;
            info!(
                input = %input_file.display(),
                workers = settings.max_workers,
                table_capacity = settings.table_capacity,
                "processing measurements"
            );

            let summary = tokio::task::spawn_blocking(move || {
                process_file(&input_file, output_file, &settings, quiet)
            })
            .await??;

            info!(
                stations = summary.stations,
                records = summary.records,
                "report written"
            );
        }

        Commands::Validate {
            input_file,
            max_workers,
            table_capacity,
            config,
        } => {
            let settings =
                Settings::load(config.as_deref())?.with_overrides(max_workers, table_capacity)?;
            info!(input = %input_file.display(), "validating measurements");

            let summary =
                tokio::task::spawn_blocking(move || validate_file(&input_file, &settings, quiet))
                    .await??;

            println!("{}", summary.summary());
            println!("All records parsed successfully");
        }
    }

    Ok(())
}

/// Aggregate `input_file` and write the report to `output_file` or stdout.
pub fn process_file(
    input_file: &Path,
    output_file: Option<PathBuf>,
    settings: &Settings,
    quiet: bool,
) -> Result<AggregationSummary> {
    aggregate_file(input_file, settings, quiet, |report| match output_file {
        Some(ref path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let mut writer = BufWriter::with_capacity(DEFAULT_OUTPUT_BUFFER_SIZE, File::create(path)?);
            report.write_to(&mut writer)?;
            writer.flush()?;
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::with_capacity(DEFAULT_OUTPUT_BUFFER_SIZE, stdout.lock());
            report.write_to(&mut writer)?;
            writer.flush()?;
            Ok(())
        }
    })
}

/// Aggregate `input_file` without writing a report; parse errors still abort.
pub fn validate_file(
    input_file: &Path,
    settings: &Settings,
    quiet: bool,
) -> Result<AggregationSummary> {
    aggregate_file(input_file, settings, quiet, |_| Ok(()))
}

fn aggregate_file<F>(
    input_file: &Path,
    settings: &Settings,
    quiet: bool,
    emit: F,
) -> Result<AggregationSummary>
where
    F: FnOnce(&Report<'_>) -> Result<()>,
{
    let buffer = InputBuffer::open(input_file)?;
    let processor = ParallelProcessor::from_settings(settings);

    let progress = ProgressReporter::new(
        settings.max_workers as u64,
        "Partitioning input...",
        quiet,
    );
    let aggregation = processor.process(&buffer, Some(&progress))?;
    progress.finish_and_clear();

    let report = ReportBuilder::build(&aggregation.table);
    emit(&report)?;

    Ok(aggregation.summary())
}
