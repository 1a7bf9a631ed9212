use anyhow::Context;
use clap::Parser;
use token_tags_extractor::{Args, Settings};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    let settings =
        Settings::build(args.config_path.as_deref()).context("failed to read config")?;
    token_tags_extractor::init_logs(&settings.tracing).context("tracing initialization")?;

    token_tags_extractor::run(settings).await
}
