//! Command line arguments

use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};
use svgfont2icons::{MalformedPathPolicy, Options};

/// Which SVG font shall we turn into icons today?
#[derive(Serialize, Deserialize, Parser, Debug, Clone, PartialEq)]
pub struct Args {
    /// An SVG font
    #[arg(short, long)]
    pub source: PathBuf,

    /// Directory config.json is written to.
    #[arg(short, long)]
    #[clap(default_value = "build")]
    pub build_dir: PathBuf,

    /// Leave out glyphs whose path data doesn't parse instead of failing the run.
    #[arg(long)]
    #[clap(default_value = "false")]
    pub skip_malformed: bool,

    /// Code point of the first icon, decimal or 0x prefixed hex.
    #[arg(long, value_parser = parse_code_point)]
    #[clap(default_value = "0xe800")]
    pub code_point_base: u32,

    /// Font name in the build configuration
    #[arg(long)]
    #[clap(default_value = "fontello")]
    pub name: String,

    /// Prefix of the generated css class names
    #[arg(long)]
    #[clap(default_value = "icon-")]
    pub css_prefix: String,
}

impl Args {
    /// Collect the settings the extraction itself cares about.
    pub fn options(&self) -> Options {
        Options {
            code_point_base: self.code_point_base,
            on_malformed_path: if self.skip_malformed {
                MalformedPathPolicy::Skip
            } else {
                MalformedPathPolicy::Abort
            },
        }
    }

    /// Manually create args for testing
    #[cfg(test)]
    pub fn for_test(build_dir: &std::path::Path, source: &str) -> Args {
        Args {
            source: crate::testdata_dir().join(source),
            build_dir: build_dir.to_path_buf(),
            skip_malformed: false,
            code_point_base: svgfont2icons::PRIVATE_USE_BASE,
            name: "fontello".to_string(),
            css_prefix: "icon-".to_string(),
        }
    }
}

fn parse_code_point(raw: &str) -> Result<u32, String> {
    let raw = raw.trim();
    let parsed = match raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => raw.parse(),
    };
    let code_point = parsed.map_err(|e| format!("'{raw}' is not a code point: {e}"))?;
    if char::from_u32(code_point).is_none() {
        return Err(format!("U+{code_point:04X} is not a valid code point"));
    }
    Ok(code_point)
}
