use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gymflow::cli;
use gymflow::config::Config;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    // Logs go to stderr; stdout carries command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::parse();
    tracing::debug!("Running {:?}", args.command);

    let stdout = std::io::stdout();
    cli::run(args, &config, &mut stdout.lock())
}
