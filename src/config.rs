use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::constants::*;
use crate::error::DeckError;

#[derive(Debug, Parser)]
#[command(name = "presenter", version, about = "Present a directory of slide images")]
pub struct Cli {
    /// Directory holding the slide images
    pub deck: PathBuf,

    /// Presentation settings (defaults to <DECK>/presentation.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,

    /// Log filter, e.g. "debug" or "presenter=trace" (overrides RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Wording and titles for a deck.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub title: String,
    pub previous_label: String,
    pub next_label: String,
    pub finish_label: String,
    pub nav_help: String,
    /// `{n}`, `{total}` and `{title}` are substituted.
    pub announcement: String,
    /// Slide titles keyed by image file name.
    pub titles: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Presentation".to_string(),
            previous_label: "< Previous".to_string(),
            next_label: "Next >".to_string(),
            finish_label: "Finish".to_string(),
            nav_help: "Use the arrow keys or the space bar to move between slides".to_string(),
            announcement: "Slide {n} of {total}: {title}".to_string(),
            titles: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, DeckError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, DeckError> {
        let text = fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// An explicit `path` must exist; otherwise the deck's own
    /// `presentation.toml` is used when there is one.
    pub fn load(path: Option<&Path>, deck_dir: &Path) -> Result<Self, DeckError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = deck_dir.join(DECK_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(&default_path)
                } else {
                    tracing::debug!("no {} in {}, using defaults", DECK_CONFIG_FILE, deck_dir.display());
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn announcement_for(&self, slide: usize, total: usize, title: &str) -> String {
        self.announcement
            .replace("{n}", &slide.to_string())
            .replace("{total}", &total.to_string())
            .replace("{title}", title)
    }

    pub fn labels(&self) -> ControlLabels {
        ControlLabels {
            next: self.next_label.clone(),
            finish: self.finish_label.clone(),
        }
    }
}

/// Texts the "next" control switches between.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlLabels {
    pub next: String,
    pub finish: String,
}

impl Default for ControlLabels {
    fn default() -> Self {
        Config::default().labels()
    }
}
