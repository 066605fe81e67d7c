//! Pure conversion functions: TOML config structs -> counter config types.

use anyhow::{bail, Result};

use firstsun_counter::{gregorian_leap, julian_leap, never_leap, CounterConfig};

use crate::config::FirstsunToml;

/// Parses a leap rule name into the corresponding predicate.
pub fn parse_leap_rule(s: &str) -> Result<fn(i32) -> bool> {
    match s.to_lowercase().as_str() {
        "gregorian" => Ok(gregorian_leap),
        "julian" => Ok(julian_leap),
        "none" => Ok(never_leap),
        other => bail!("unknown leap rule: {other:?}"),
    }
}

/// Converts a TOML month layout into a fixed 12-entry array.
pub fn parse_layout(layout: &[u32], which: &str) -> Result<[u32; 12]> {
    match <[u32; 12]>::try_from(layout) {
        Ok(arr) => Ok(arr),
        Err(_) => bail!("{which} must have 12 entries, got {}", layout.len()),
    }
}

/// Builds a [`CounterConfig`] from the TOML configuration.
pub fn build_counter_config(toml: &FirstsunToml) -> Result<CounterConfig> {
    let mut cfg = CounterConfig::new();
    if let Some(year) = toml.ref_year {
        cfg = cfg.with_ref_year(year);
    }
    if let Some(ref day) = toml.ref_first_day {
        cfg = cfg.with_ref_first_day(day.as_str());
    }
    if let Some(ref layout) = toml.year_layout {
        cfg = cfg.with_year_layout(parse_layout(layout, "year_layout")?);
    }
    if let Some(ref layout) = toml.leap_layout {
        cfg = cfg.with_leap_layout(parse_layout(layout, "leap_layout")?);
    }
    if let Some(ref rule) = toml.leap_rule {
        cfg = cfg.with_leap_predicate(parse_leap_rule(rule)?);
    }
    Ok(cfg)
}
