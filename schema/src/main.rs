use nft_metadata::template::Item;
use schemars::schema_for;
use std::fs;

fn main() -> anyhow::Result<()> {
	let schema = schema_for!(Item);
	let content = serde_json::to_string_pretty(&schema)?;

	fs::create_dir_all("generated")?;

	fs::write("generated/metadata.json", content)?;

	Ok(())
}
