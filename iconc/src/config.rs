//! The configuration an icon font build service takes as input.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use svgfont2icons::NormalizedIcon;
use uuid::Uuid;

use crate::{error::Error, Args};

/// Name of the file written to the build directory
pub const CONFIG_FILE: &str = "config.json";

/// Where custom icons come from, as far as the build service is concerned
const CUSTOM_ICONS: &str = "custom_icons";

/// Every icon has been normalized to this em
const UNITS_PER_EM: u32 = 1000;
const ASCENT: u32 = 850;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BuildConfig {
    pub name: String,
    pub css_prefix_text: String,
    pub css_use_suffix: bool,
    pub hinting: bool,
    pub units_per_em: u32,
    pub ascent: u32,
    pub glyphs: Vec<GlyphConfig>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GlyphConfig {
    /// 32 lowercase hex digits, fresh for every run
    pub uid: String,
    pub src: String,
    pub selected: bool,
    pub css: SmolStr,
    pub code: u32,
    pub search: Vec<SmolStr>,
    pub svg: SvgConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SvgConfig {
    pub path: String,
    pub width: f64,
}

impl From<NormalizedIcon> for GlyphConfig {
    fn from(icon: NormalizedIcon) -> Self {
        GlyphConfig {
            uid: Uuid::new_v4().simple().to_string(),
            src: CUSTOM_ICONS.to_string(),
            selected: true,
            search: vec![icon.name.clone()],
            css: icon.name,
            code: icon.code_point,
            svg: SvgConfig {
                path: icon.path,
                width: icon.width,
            },
        }
    }
}

impl BuildConfig {
    pub fn new(args: &Args, icons: Vec<NormalizedIcon>) -> BuildConfig {
        BuildConfig {
            name: args.name.clone(),
            css_prefix_text: args.css_prefix.clone(),
            css_use_suffix: false,
            hinting: true,
            units_per_em: UNITS_PER_EM,
            ascent: ASCENT,
            glyphs: icons.into_iter().map(GlyphConfig::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write `config.json` into `dir`, which must already exist.
    pub fn write(&self, dir: &Path) -> Result<PathBuf, Error> {
        let file = dir.join(CONFIG_FILE);
        fs::write(&file, self.to_json()?).map_err(|source| Error::FileIo {
            path: file.clone(),
            source,
        })?;
        debug!("Wrote {} glyphs to {file:?}", self.glyphs.len());
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::tempdir;

    fn star() -> NormalizedIcon {
        NormalizedIcon {
            name: "star".into(),
            code_point: 0xe800,
            path: "M0,850L1000,850L500,0Z".to_string(),
            width: 1000.0,
        }
    }

    fn args() -> Args {
        Args::for_test(Path::new("build"), "icons.svg")
    }

    #[test]
    fn payload_shape() {
        let config = BuildConfig::new(&args(), vec![star()]);
        let mut actual: serde_json::Value = serde_json::from_str(&config.to_json().unwrap()).unwrap();
        let uid = actual["glyphs"][0]
            .as_object_mut()
            .unwrap()
            .remove("uid")
            .unwrap();
        assert_eq!(32, uid.as_str().unwrap().len());
        assert_eq!(
            json!({
                "name": "fontello",
                "css_prefix_text": "icon-",
                "css_use_suffix": false,
                "hinting": true,
                "units_per_em": 1000,
                "ascent": 850,
                "glyphs": [{
                    "src": "custom_icons",
                    "selected": true,
                    "css": "star",
                    "code": 59392,
                    "search": ["star"],
                    "svg": {
                        "path": "M0,850L1000,850L500,0Z",
                        "width": 1000.0
                    }
                }]
            }),
            actual
        );
    }

    #[test]
    fn uids_are_lowercase_hex_and_distinct() {
        let config = BuildConfig::new(&args(), vec![star(), star()]);
        let uids: Vec<_> = config.glyphs.iter().map(|g| g.uid.as_str()).collect();
        assert_ne!(uids[0], uids[1]);
        for uid in uids {
            assert!(
                uid.chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
                "{uid}"
            );
        }
    }

    #[test]
    fn names_come_from_args() {
        let mut args = args();
        args.name = "my-icons".to_string();
        args.css_prefix = "i-".to_string();
        let config = BuildConfig::new(&args, Vec::new());
        assert_eq!(
            ("my-icons", "i-"),
            (config.name.as_str(), config.css_prefix_text.as_str())
        );
        assert!(config.glyphs.is_empty());
    }

    #[test]
    fn write_then_read() {
        let temp_dir = tempdir().unwrap();
        let config = BuildConfig::new(&args(), vec![star()]);
        let file = config.write(temp_dir.path()).unwrap();
        assert_eq!(temp_dir.path().join(CONFIG_FILE), file);
        let read: BuildConfig =
            serde_json::from_str(&fs::read_to_string(file).unwrap()).unwrap();
        assert_eq!(config, read);
    }
}
