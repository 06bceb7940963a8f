use clap::Parser;
use pinpoint_core::config::Config;

#[derive(Parser)]
#[command(name = "pinpoint", about = "pinpoint — terminal point-of-interest map explorer")]
struct Cli {
    /// Write debug logs to <tmp>/pinpoint-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Use the local development endpoint instead of the deployed one.
    /// (Also enabled by PINPOINT_LOCAL=1.)
    #[arg(long)]
    local: bool,

    /// Fetch the feature collection from this URL, overriding the config.
    #[arg(long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let path = std::env::temp_dir().join("pinpoint-debug.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("pinpoint debug log started — tail -f {}", path.display());
    }

    let config = Config::load().unwrap_or_else(|_| Config::defaults());

    let local = cli.local || std::env::var("PINPOINT_LOCAL").as_deref() == Ok("1");
    let url = cli
        .url
        .unwrap_or_else(|| config.source_url(local).to_string());
    tracing::info!(%url, local, "feature source selected");

    pinpoint_tui::run(config, url).await
}
