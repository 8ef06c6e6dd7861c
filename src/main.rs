use anyhow::Context;
use clap::Parser;
use nft_metadata::{manifest::Manifest, preset::Preset};
use std::path::PathBuf;

/// Generates numbered JSON metadata files for an NFT collection
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// The compiled-in collection to generate
    #[arg(short, long, conflicts_with = "config")]
    preset: Option<Preset>,

    /// A TOML manifest describing the collection to generate
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the amount of items
    #[arg(short = 'n', long)]
    count: Option<u32>,

    /// Overrides the directory the metadata files are written to
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Writes indented JSON
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Writes compact JSON, even if the manifest asks for indented JSON
    #[arg(long)]
    compact: bool,
}

impl Cli {
    fn manifest(self) -> anyhow::Result<Manifest> {
        let mut manifest = match &self.config {
            Some(path) => Manifest::from_path(path).context("failed to read manifest")?,
            None => self.preset.unwrap_or_default().manifest(),
        };

        if let Some(count) = self.count {
            manifest.count = count;
        }
        if let Some(out_dir) = self.out_dir {
            manifest.out_dir = out_dir;
        }
        if self.pretty {
            manifest.pretty = true;
        } else if self.compact {
            manifest.pretty = false;
        }

        Ok(manifest)
    }
}

fn main() -> anyhow::Result<()> {
    let mut logger = pretty_env_logger::formatted_builder();
    logger.filter_level(log::LevelFilter::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        logger.parse_filters(&filters);
    }
    logger.init();

    let manifest = Cli::parse().manifest()?;

    manifest.generate().with_context(|| {
        format!(
            "failed to generate metadata into {}",
            manifest.out_dir.display()
        )
    })?;

    Ok(())
}
