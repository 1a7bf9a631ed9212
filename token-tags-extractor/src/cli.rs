use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Settings file. Takes precedence over `TOKEN_TAGS_EXTRACTOR__CONFIG`.
    #[clap(short, long)]
    pub config_path: Option<PathBuf>,
}
