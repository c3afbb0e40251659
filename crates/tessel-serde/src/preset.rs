//! Named rule files in a directory.

use crate::error::SerdeError;
use crate::pointer::{parse_pointer_rules, pointer_rules_to_json};
use crate::rules::{neighborhood_rules_to_json, parse_neighborhood_rules};
use log::{debug, info};
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use tessel_automata::{PointerRule, RuleSet, StateColors};

/// Longest accepted preset name, in characters.
pub const MAX_PRESET_NAME_LEN: usize = 100;

/// Characters not allowed in preset names.
pub const INVALID_NAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

const EXTENSION: &str = "json";

/// A directory of `<name>.json` rule files.
///
/// The directory is created on the first save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetStore {
    root: PathBuf,
}

impl PresetStore {
    /// Creates a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the store directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Checks a preset name and returns it without surrounding whitespace.
    pub fn validate_name(name: &str) -> Result<&str, SerdeError> {
        let name = name.trim();
        if name.is_empty()
            || name.chars().count() > MAX_PRESET_NAME_LEN
            || name.contains(INVALID_NAME_CHARS)
        {
            return Err(SerdeError::InvalidPresetName(name.to_string()));
        }
        Ok(name)
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, SerdeError> {
        let name = Self::validate_name(name)?;
        Ok(self.root.join(format!("{name}.{EXTENSION}")))
    }

    /// Writes a preset, replacing any existing one of the same name.
    pub fn save(&self, name: &str, bytes: &[u8]) -> Result<(), SerdeError> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.root)?;
        fs::write(&path, bytes)?;
        info!("saved preset {}", path.display());
        Ok(())
    }

    /// Reads a preset.
    pub fn load(&self, name: &str) -> Result<Vec<u8>, SerdeError> {
        let path = self.path_for(name)?;
        fs::read(&path).map_err(|err| match err.kind() {
            IoErrorKind::NotFound => SerdeError::PresetNotFound(name.trim().to_string()),
            _ => SerdeError::Io(err),
        })
    }

    /// Removes a preset.
    pub fn delete(&self, name: &str) -> Result<(), SerdeError> {
        let path = self.path_for(name)?;
        fs::remove_file(&path).map_err(|err| match err.kind() {
            IoErrorKind::NotFound => SerdeError::PresetNotFound(name.trim().to_string()),
            _ => SerdeError::Io(err),
        })?;
        info!("deleted preset {}", path.display());
        Ok(())
    }

    /// Lists preset names in sorted order. A missing directory is empty.
    pub fn list(&self) -> Result<Vec<String>, SerdeError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) if err.kind() == IoErrorKind::NotFound => {
                debug!("preset directory {} does not exist", self.root.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Saves a neighborhood rule set.
    pub fn save_neighborhood(&self, name: &str, ruleset: &RuleSet) -> Result<(), SerdeError> {
        self.save(name, &neighborhood_rules_to_json(ruleset, true)?)
    }

    /// Loads a neighborhood rule set.
    pub fn load_neighborhood(&self, name: &str) -> Result<RuleSet, SerdeError> {
        parse_neighborhood_rules(&self.load(name)?)
    }

    /// Saves pointer rules and colors.
    pub fn save_pointer(&self, name: &str, rules: &[PointerRule], colors: &StateColors) -> Result<(), SerdeError> {
        self.save(name, &pointer_rules_to_json(rules, colors, true)?)
    }

    /// Loads pointer rules and colors.
    pub fn load_pointer(&self, name: &str) -> Result<(Vec<PointerRule>, StateColors), SerdeError> {
        parse_pointer_rules(&self.load(name)?)
    }
}
