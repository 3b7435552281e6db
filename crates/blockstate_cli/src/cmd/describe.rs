use std::path::PathBuf;

use blockstate::state::{DescribeOptions, PropertyOutcome, describe_states};
use serde_json::json;
use tracing::info;

use crate::cmd::util::{load_envelope, render_decoded, render_version};
use crate::error::Result;

/// Decode every property of the block state stored at `path` and print it.
pub fn run(path: PathBuf, json: bool, lenient: bool, skip_unknown: bool) -> Result<()> {
	let data = load_envelope(&path)?;
	let options = DescribeOptions {
		strict: !lenient,
		include_unknown: !skip_unknown,
	};
	let props = describe_states(&data.reader(), &options)?;
	info!(block = %data.name, properties = props.len(), "described block state");

	if json {
		let properties: Vec<_> = props
			.iter()
			.map(|prop| match &prop.outcome {
				PropertyOutcome::Decoded(value) => json!({ "name": prop.name, "value": value }),
				PropertyOutcome::Failed(err) => json!({ "name": prop.name, "error": err.to_string() }),
			})
			.collect();
		let out = json!({
			"path": path.display().to_string(),
			"name": data.name,
			"version": data.version,
			"properties": properties,
		});
		println!("{}", serde_json::to_string_pretty(&out)?);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("name: {}", data.name);
	println!("version: {}", render_version(&data));
	println!("properties:");
	for prop in &props {
		match &prop.outcome {
			PropertyOutcome::Decoded(value) => println!("  {} = {}", prop.name, render_decoded(value)),
			PropertyOutcome::Failed(err) => println!("  {} ! {err}", prop.name),
		}
	}

	Ok(())
}
