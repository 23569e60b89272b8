//! Optional settings file and word-list lookup
//!
//! Values resolve in order: command-line flag, settings file, built-in
//! default. The settings file lives at
//! `<data_local_dir>/wordgrid/settings.json`, or under `$WORDGRID_DATA_DIR`
//! when that variable is set.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use wordgrid_core::{
    GeneratorConfig, RescanScope, DEFAULT_CYCLES, DEFAULT_SIZE, MIN_INTERACTIVE_SIZE,
};

/// Default best-of search budget
pub const DEFAULT_BUDGET_MS: i64 = 2_000;

const SETTINGS_FILE: &str = "settings.json";
const WORDS_FILE: &str = "words.txt";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub size: Option<usize>,
    pub cycles: Option<usize>,
    pub budget_ms: Option<i64>,
    pub words: Option<PathBuf>,
}

impl Settings {
    /// Directory holding the settings file and the default word list
    pub fn data_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os("WORDGRID_DATA_DIR") {
            return PathBuf::from(dir);
        }
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordgrid")
    }

    /// Load the settings file, falling back to defaults when it is missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::data_dir().join(SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let json = match fs::read_to_string(path) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            result => result.with_context(|| format!("reading {}", path.display()))?,
        };
        serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))
    }

    /// Word list to load: the flag, then the settings file, then the data dir
    pub fn word_list(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.words.clone())
            .unwrap_or_else(|| Self::data_dir().join(WORDS_FILE))
    }

    /// Merge command-line overrides into a generator configuration
    pub fn generator_config(
        &self,
        size: Option<usize>,
        cycles: Option<usize>,
        rescan: RescanScope,
    ) -> Result<GeneratorConfig> {
        let size = size.or(self.size).unwrap_or(DEFAULT_SIZE);
        if size < MIN_INTERACTIVE_SIZE {
            bail!("board size must be at least {}, got {}", MIN_INTERACTIVE_SIZE, size);
        }
        Ok(GeneratorConfig {
            size,
            cycles: cycles.or(self.cycles).unwrap_or(DEFAULT_CYCLES),
            rescan,
        })
    }

    pub fn budget_ms(&self, flag: Option<i64>) -> i64 {
        flag.or(self.budget_ms).unwrap_or(DEFAULT_BUDGET_MS)
    }
}
