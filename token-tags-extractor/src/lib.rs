mod cli;
mod output;
mod settings;
mod tracing;

pub use cli::Args;
pub use output::{write_tags, OutputFormat, OutputSettings};
pub use settings::Settings;
pub use tracing::{init_logs, TracingFormat, TracingSettings};

use anyhow::Context;
use std::{fs::File, io::BufWriter};
use token_tags_logic::{fetch_public_tags, fetch_tags, TagsFetcher};

pub async fn run(settings: Settings) -> Result<(), anyhow::Error> {
    let fetcher = TagsFetcher::new(settings.chains, settings.tags, settings.fetcher)
        .context("fetcher initialization failed")?;

    ::tracing::info!(
        chain_id = %settings.chain_id,
        public_mode = settings.public_mode,
        "fetching tags started"
    );
    let tags = if settings.public_mode {
        fetch_public_tags(&fetcher, &settings.chain_id, settings.api_key.as_deref()).await
    } else {
        let api_key = settings
            .api_key
            .as_deref()
            .context("`api_key` must be set unless `public_mode` is enabled")?;
        fetch_tags(&fetcher, &settings.chain_id, api_key).await
    }
    .context(format!("fetching tags failed: chain_id={}", settings.chain_id))?;

    match &settings.output.path {
        Some(path) => {
            let file = File::create(path)
                .context(format!("creating output file failed: {}", path.display()))?;
            write_tags(BufWriter::new(file), &tags, settings.output.format)?;
        }
        None => write_tags(std::io::stdout().lock(), &tags, settings.output.format)?,
    }
    ::tracing::info!(total = tags.len(), "tags written");

    Ok(())
}
