use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "station-stats")]
#[command(about = "High-performance per-station min/mean/max over station;temperature files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Hide the progress bar")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate a measurements file and write the per-station report
    Process {
        #[arg(short, long, help = "Input measurements file (station;temperature lines)")]
        input_file: PathBuf,

        #[arg(short, long, help = "Report output path [default: stdout]")]
        output_file: Option<PathBuf>,

        #[arg(long, help = "Worker threads [default: number of CPUs]")]
        max_workers: Option<usize>,

        #[arg(long, help = "Aggregate table slots per worker [default: 16384]")]
        table_capacity: Option<usize>,

        #[arg(short, long, help = "Configuration file (TOML, JSON or YAML)")]
        config: Option<PathBuf>,
    },

    /// Scan and aggregate a measurements file, printing a summary instead of the report
    Validate {
        #[arg(short, long, help = "Input measurements file (station;temperature lines)")]
        input_file: PathBuf,

        #[arg(long, help = "Worker threads [default: number of CPUs]")]
        max_workers: Option<usize>,

        #[arg(long, help = "Aggregate table slots per worker [default: 16384]")]
        table_capacity: Option<usize>,

        #[arg(short, long, help = "Configuration file (TOML, JSON or YAML)")]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process_command() {
        let cli = Cli::parse_from([
            "station-stats",
            "--quiet",
            "process",
            "--input-file",
            "measurements.txt",
            "--max-workers",
            "8",
        ]);

        assert!(cli.quiet);
        match cli.command {
            Commands::Process {
                input_file,
                output_file,
                max_workers,
                table_capacity,
                ..
            } => {
                assert_eq!(input_file, PathBuf::from("measurements.txt"));
                assert_eq!(output_file, None);
                assert_eq!(max_workers, Some(8));
                assert_eq!(table_capacity, None);
            }
            Commands::Validate { .. } => panic!("expected process command"),
        }
    }
}
