//! CLI argument parsing for tracealign

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for edit distance reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

/// Granularity of the comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Compare execution event names
    Events,
    /// Compare API calls inside matched execution events
    Apis,
}

#[derive(Parser, Debug)]
#[command(name = "tracealign")]
#[command(version)]
#[command(about = "Edit-distance alignment of record and replay execution traces", long_about = None)]
pub struct Cli {
    /// Trace captured during the record run (JSON)
    #[arg(long, value_name = "FILE")]
    pub record: PathBuf,

    /// Trace captured during the replay run (JSON)
    #[arg(long, value_name = "FILE")]
    pub replay: PathBuf,

    /// Frame to compare (defaults to the first frame in name order)
    #[arg(long, value_name = "NAME")]
    pub frame: Option<String>,

    /// Sequence index within the frame
    #[arg(long = "seq-id", value_name = "N", default_value = "0")]
    pub seq_id: usize,

    /// Comparison granularity
    #[arg(short, long, value_enum, default_value = "events")]
    pub mode: Mode,

    /// Record event indices to compare in API mode (e.g. 0,2,5)
    #[arg(long = "record-events", value_name = "IDX", value_delimiter = ',')]
    pub record_events: Vec<usize>,

    /// Replay event indices paired with --record-events
    #[arg(long = "replay-events", value_name = "IDX", value_delimiter = ',')]
    pub replay_events: Vec<usize>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Alignment configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Return values longer than this are hashed before comparison
    #[arg(long = "hash-threshold", value_name = "CHARS")]
    pub hash_threshold: Option<usize>,

    /// Maximum distance matrix cells per comparison
    #[arg(long = "max-cells", value_name = "CELLS")]
    pub max_cells: Option<usize>,

    /// Compare event pairs on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Enable debug logging to stderr
    #[arg(short, long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Vec<&'static str> {
        vec!["tracealign", "--record", "rec.json", "--replay", "rep.json"]
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(base());

        assert_eq!(cli.record, PathBuf::from("rec.json"));
        assert_eq!(cli.replay, PathBuf::from("rep.json"));
        assert_eq!(cli.mode, Mode::Events);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.seq_id, 0);
        assert!(cli.frame.is_none());
        assert!(cli.record_events.is_empty());
        assert!(!cli.sequential);
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_api_mode_with_indices() {
        let mut args = base();
        args.extend([
            "--mode",
            "apis",
            "--record-events",
            "0,2,5",
            "--replay-events",
            "1,2,4",
        ]);

        let cli = Cli::parse_from(args);

        assert_eq!(cli.mode, Mode::Apis);
        assert_eq!(cli.record_events, vec![0, 2, 5]);
        assert_eq!(cli.replay_events, vec![1, 2, 4]);
    }

    #[test]
    fn test_cli_overrides() {
        let mut args = base();
        args.extend([
            "--hash-threshold",
            "20",
            "--max-cells",
            "1000",
            "--sequential",
            "--format",
            "csv",
        ]);

        let cli = Cli::parse_from(args);

        assert_eq!(cli.hash_threshold, Some(20));
        assert_eq!(cli.max_cells, Some(1000));
        assert!(cli.sequential);
        assert_eq!(cli.format, OutputFormat::Csv);
    }

    #[test]
    fn test_cli_requires_both_traces() {
        assert!(Cli::try_parse_from(["tracealign", "--record", "rec.json"]).is_err());
    }
}
