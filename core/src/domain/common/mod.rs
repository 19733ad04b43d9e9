use std::path::PathBuf;

use crate::domain::conflict::value_objects::DEFAULT_MIN_FRAGMENT_LEN;

pub mod entities;
pub mod services;

#[derive(Clone, Debug, Default)]
pub struct SkinsafeConfig {
    pub conflict: ConflictConfig,
}

#[derive(Clone, Debug)]
pub struct ConflictConfig {
    /// JSON rule table to load instead of the built-in one.
    pub rules_path: Option<PathBuf>,
    pub min_fragment_len: usize,
}

impl Default for ConflictConfig {
    fn default() -> Self {
        Self {
            rules_path: None,
            min_fragment_len: DEFAULT_MIN_FRAGMENT_LEN,
        }
    }
}
