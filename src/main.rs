use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mood_journal_core::client::{HttpAnalysisClient, JournalEntry};
use mood_journal_core::config::Config;
use mood_journal_core::display::ConsoleDisplay;
use mood_journal_core::error::SubmitError;
use mood_journal_core::journal::Journal;
use mood_journal_core::projector::ResultProjector;
use mood_journal_core::visualizer::MoodVisualizer;

#[derive(Debug, Parser)]
#[command(name = "mood-journal", version, about = "Submit a journal entry and see its mood")]
struct Args {
    /// Journal text. Read from stdin when omitted.
    text: Option<String>,

    #[arg(long, default_value = "")]
    title: String,

    #[arg(long, default_value = "")]
    location: String,

    #[arg(long, default_value = "")]
    weather: String,

    /// Analysis endpoint (overrides MOOD_JOURNAL_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,

    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Directory the scene snapshot is written into
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Print the normalized result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Args {
    fn apply(&self, cfg: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            cfg.endpoint = endpoint.clone();
        }
        if let Some(secs) = self.timeout_secs {
            cfg.timeout_secs = secs;
        }
        if let Some(width) = self.width {
            cfg.width = width;
        }
        if let Some(height) = self.height {
            cfg.height = height;
        }
        if let Some(dir) = &self.out_dir {
            cfg.out_dir = dir.clone();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let args = Args::parse();
    let mut cfg = Config::from_env();
    args.apply(&mut cfg);

    let text = match &args.text {
        Some(text) => text.clone(),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read journal text from stdin")?;
            buf
        }
    };
    let entry = JournalEntry::new(&args.title, &args.location, &args.weather, &text);

    let visualizer = MoodVisualizer::initialize(cfg.width, cfg.height, &cfg.out_dir)
        .context("failed to set up the mood visualization")?;
    let client = HttpAnalysisClient::from_config(&cfg)?;
    let mut journal = Journal::new(client, ResultProjector::new(visualizer, ConsoleDisplay::new()));

    let outcome = journal.submit(entry).await;
    let (visualizer, display) = journal.into_projector().into_parts();

    match outcome {
        Ok(result) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                display.print();
            }
            let path = visualizer.save_snapshot()?;
            info!(path = %path.display(), "mood scene saved");
            Ok(())
        }
        Err(SubmitError::EmptyText) => anyhow::bail!("Please enter your journal text."),
        Err(e) => {
            display.print();
            Err(e.into())
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mood_journal_core=info,mood_journal=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Args::try_parse_from(["mood-journal", "--timeout-secs", "0", "hi"]).is_err());
    }

    #[test]
    fn positive_timeout_is_accepted() {
        let args = Args::try_parse_from(["mood-journal", "--timeout-secs", "3", "hi"]).unwrap();
        assert_eq!(args.timeout_secs, Some(3));
        assert_eq!(args.text.as_deref(), Some("hi"));
    }
}
