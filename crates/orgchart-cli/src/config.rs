//! Role limit configuration

use std::path::Path;

use anyhow::Context;
use orgchart_core::RoleLimits;

/// Load role limits from a TOML file, or the defaults when no file is given
///
/// Fields left out of the file keep their default value; unknown fields are
/// rejected.
pub fn load_limits(path: Option<&Path>) -> anyhow::Result<RoleLimits> {
    let Some(path) = path else {
        return Ok(RoleLimits::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read limits file {}", path.display()))?;
    parse_limits(&text).with_context(|| format!("invalid limits file {}", path.display()))
}

fn parse_limits(text: &str) -> Result<RoleLimits, toml::de::Error> {
    toml::from_str(text)
}
