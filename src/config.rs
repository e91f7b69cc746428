use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::checker::CheckerOptions;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: String,
    pub dictionary: Option<PathBuf>,
    pub personal_dictionary: Option<PathBuf>,

    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    #[serde(default = "default_max_suggestion_distance")]
    pub max_suggestion_distance: usize,

    #[serde(default = "default_suggestions")]
    pub suggestions: bool,
}

fn default_max_suggestions() -> usize {
    5
}

fn default_max_suggestion_distance() -> usize {
    2
}

fn default_suggestions() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en_US".to_string(),
            dictionary: None,
            personal_dictionary: None,
            max_suggestions: default_max_suggestions(),
            max_suggestion_distance: default_max_suggestion_distance(),
            suggestions: default_suggestions(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        language: String,
        dictionary: Option<PathBuf>,
        personal_dict: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".spellcore.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        config.language = language;
        if dictionary.is_some() {
            config.dictionary = dictionary;
        }
        if personal_dict.is_some() {
            config.personal_dictionary = personal_dict;
        }

        // Set default personal dictionary if not specified
        if config.personal_dictionary.is_none() {
            config.personal_dictionary = Self::default_personal_dict_path();
        }

        // Ensure personal dictionary file exists
        if let Some(path) = &config.personal_dictionary {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .context("Failed to create personal dictionary directory")?;
            }
            if !path.exists() {
                fs::write(path, "").context("Failed to create personal dictionary file")?;
            }
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.language != "en_US" {
            self.language = other.language;
        }
        if other.dictionary.is_some() {
            self.dictionary = other.dictionary;
        }
        if other.personal_dictionary.is_some() {
            self.personal_dictionary = other.personal_dictionary;
        }
        if other.max_suggestions != default_max_suggestions() {
            self.max_suggestions = other.max_suggestions;
        }
        if other.max_suggestion_distance != default_max_suggestion_distance() {
            self.max_suggestion_distance = other.max_suggestion_distance;
        }
        self.suggestions = other.suggestions;
        self
    }

    /// Resolve the main dictionary path: an explicit path wins, otherwise
    /// the per-language wordlist in the data directory.
    pub fn main_dictionary_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.dictionary {
            return Some(path.clone());
        }
        Self::data_dir().map(|dir| dir.join(format!("{}.txt", self.language)))
    }

    /// Engine options derived from this configuration. The `enabled` gate
    /// is always on for the CLI; hosts embedding the engine set it freely.
    pub fn checker_options(&self) -> CheckerOptions {
        CheckerOptions {
            enabled: true,
            suggestions_enabled: self.suggestions,
            max_suggestion_distance: self.max_suggestion_distance,
            max_suggestions: self.max_suggestions,
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellcore").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn default_personal_dict_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellcore").map(|dirs| dirs.config_dir().join("personal.txt"))
    }

    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellcore").map(|dirs| dirs.data_dir().to_path_buf())
    }
}
