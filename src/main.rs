use clap::Parser;
use quill::core::config::{self, CliOverrides, QuillConfig};
use quill::core::next_words::NextWords;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quill", about = "Terminal client for a next-words text generation service")]
struct Args {
    /// Base URL of the generation service (e.g. http://localhost:8000)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Number of words to generate per request
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(NextWords::MIN as i64..=NextWords::MAX as i64))]
    next_words: Option<u8>,

    /// Where to write the debug log
    #[arg(long, default_value = "quill.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The TUI owns stdout, so logs go to a file
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Using default configuration: {}", e);
        QuillConfig::default()
    });
    let cli = CliOverrides {
        endpoint: args.endpoint,
        next_words: args.next_words,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Quill starting up: endpoint={}, next_words={}",
        resolved.endpoint,
        resolved.next_words
    );

    quill::tui::run(resolved)
}
