use anyhow::{Context, Result};
use clap::Parser;
use tracealign::cli::{Cli, Mode, OutputFormat};
use tracealign::comparison::Comparator;
use tracealign::config::AlignConfig;
use tracealign::output;
use tracealign::report::EditDistanceReport;
use tracealign::trace::TraceFile;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Load the config file (if any) and apply command-line overrides
fn build_config(args: &Cli) -> Result<AlignConfig> {
    let mut config = match &args.config {
        Some(path) => AlignConfig::from_file(path)?,
        None => AlignConfig::default(),
    };

    if let Some(threshold) = args.hash_threshold {
        config.hash_threshold = threshold;
    }
    if let Some(cells) = args.max_cells {
        config.max_cells = Some(cells);
    }
    if args.sequential {
        config.parallel = false;
    }

    config.validate()?;
    Ok(config)
}

fn render(reports: &[EditDistanceReport], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => output::render_text(reports),
        OutputFormat::Json => output::render_json(reports)?,
        OutputFormat::Csv => output::render_csv(reports),
    })
}

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.record_events.len() != args.replay_events.len() {
        anyhow::bail!(
            "--record-events and --replay-events must list the same number of events ({} vs {})",
            args.record_events.len(),
            args.replay_events.len()
        );
    }

    init_tracing(args.debug);

    let config = build_config(&args)?;

    let record_trace = TraceFile::from_file(&args.record).context("loading record trace")?;
    let replay_trace = TraceFile::from_file(&args.replay).context("loading replay trace")?;
    let record = record_trace.sequence(args.frame.as_deref(), args.seq_id)?;
    let replay = replay_trace.sequence(args.frame.as_deref(), args.seq_id)?;

    let comparator = Comparator::new(config);

    let reports = match args.mode {
        Mode::Events => vec![comparator.compare_events(record, replay)?],
        Mode::Apis => {
            let comparison =
                comparator.compare_apis(record, replay, &args.record_events, &args.replay_events);
            for failure in &comparison.failures {
                eprintln!("warning: {}", failure);
            }
            comparison.reports
        }
    };

    print!("{}", render(&reports, args.format)?);

    Ok(())
}
