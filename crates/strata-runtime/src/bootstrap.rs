use std::fs;
use std::path::Path;

use tracing::{info, warn};

use strata_core::{Result, StrataError};
use strata_registry::SectionRegistry;
use strata_store::ParamTree;

/// Formats the driver understands, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

fn format_for(path: &Path) -> Result<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(StrataError::Config(format!(
            "unsupported parameter file extension for {}: use .toml or .json",
            path.display()
        ))),
    }
}

/// Run the full configuration bootstrap against `input`:
///
/// 1. Declare pass — every registrant publishes its schema into `store`.
/// 2. Load the input file into the declared tree.
/// 3. Parse pass — every registrant reads its values back out.
///
/// When `input` does not exist, a parameter file populated with the
/// declared defaults (and descriptions as comments, for TOML) is written
/// in its place and an error is returned telling the user to edit it.
pub fn initialize(registry: &SectionRegistry, store: &mut ParamTree, input: &Path) -> Result<()> {
    let format = format_for(input)?;

    registry.declare_all(store)?;

    if !input.exists() {
        write_default_file(store, input, format)?;
        warn!(path = %input.display(), "parameter file not found, generated one with defaults");
        return Err(StrataError::Config(format!(
            "{} did not exist; a default parameter file has been generated — edit it and rerun",
            input.display()
        )));
    }

    info!(path = %input.display(), "loading parameter file");
    let raw = fs::read_to_string(input)?;
    match format {
        Format::Toml => store.load_toml_str(&raw)?,
        Format::Json => store.load_json_str(&raw)?,
    }

    registry.parse_all(store)?;
    info!(sections = registry.live_count(), "configuration parsed");
    Ok(())
}

/// Write the store's current values to `output`, as TOML or JSON by
/// extension.
pub fn write_parameters(store: &ParamTree, output: &Path) -> Result<()> {
    let contents = match format_for(output)? {
        Format::Toml => store.to_toml_string()?,
        Format::Json => store.to_json_string()?,
    };
    fs::write(output, contents)?;
    info!(path = %output.display(), "wrote parameter values");
    Ok(())
}

fn write_default_file(store: &ParamTree, path: &Path, format: Format) -> Result<()> {
    // Right after the declare pass every value still equals its default,
    // so the JSON value dump doubles as the default file.
    let contents = match format {
        Format::Toml => store.to_default_toml_string(),
        Format::Json => store.to_json_string()?,
    };
    fs::write(path, contents)?;
    Ok(())
}
