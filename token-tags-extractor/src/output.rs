use anyhow::Context;
use serde::Deserialize;
use std::{io::Write, path::PathBuf};
use token_tags_logic::Tag;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    /// Tags are written to stdout if not set.
    pub path: Option<PathBuf>,
    pub format: OutputFormat,
}

pub fn write_tags<W: Write>(
    mut writer: W,
    tags: &[Tag],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, tags)
                .context("serializing tags into json")?;
            writeln!(writer).context("writing tags")?;
            writer.flush().context("writing tags")?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(writer);
            for tag in tags {
                writer.serialize(tag).context("serializing tag into csv")?;
            }
            writer.flush().context("writing tags")?;
        }
    }

    Ok(())
}
