//! Turns an SVG font into the configuration an icon font build service takes.

mod args;
pub mod config;
mod error;

pub use args::Args;
pub use config::BuildConfig;
pub use error::Error;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, error};
use svgfont2icons::import_svg_font;

pub fn require_dir(dir: &Path) -> Result<PathBuf, Error> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::ExpectedDirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| Error::FileIo {
            path: dir.to_path_buf(),
            source,
        })?
    }
    debug!("require_dir {:?}", dir);
    Ok(dir.to_path_buf())
}

/// Extract the icons of `args.source` and build their configuration.
pub fn build_config(args: &Args) -> Result<BuildConfig, Error> {
    if !args.source.is_file() {
        return Err(Error::FileExpected(args.source.clone()));
    }
    let svg = fs::read_to_string(&args.source).map_err(|source| Error::FileIo {
        path: args.source.clone(),
        source,
    })?;
    let icons = import_svg_font(&svg, &args.options()).inspect_err(|e| {
        error!("Failed to extract icons from {:?}: {e}", args.source);
    })?;
    Ok(BuildConfig::new(args, icons))
}

/// Run the whole thing, returning the path of the configuration written.
pub fn run(args: &Args) -> Result<PathBuf, Error> {
    let config = build_config(args)?;
    let build_dir = require_dir(&args.build_dir)?;
    config.write(&build_dir)
}

#[cfg(test)]
pub fn testdata_dir() -> PathBuf {
    let path = PathBuf::from("../resources/testdata")
        .canonicalize()
        .unwrap();
    assert!(path.is_dir(), "{path:#?} isn't a dir");
    path
}
