//! Static page configuration and its startup checks.

use crate::constants::CATALOG_LIMIT;
use crate::content::{PHRASES, PROJECTS};
use crate::showcase::Project;
use fnv::FnvHashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("phrase list is empty")]
    EmptyPhraseList,
    #[error("catalog limit must be at least 1")]
    ZeroCatalogLimit,
    #[error("duplicate project id {0:?}")]
    DuplicateProjectId(&'static str),
}

#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub phrases: Vec<String>,
    pub projects: Vec<Project>,
    pub catalog_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            phrases: PHRASES.iter().map(|p| p.to_string()).collect(),
            projects: PROJECTS.to_vec(),
            catalog_limit: CATALOG_LIMIT,
        }
    }
}

impl SiteConfig {
    /// Check the invariants every component relies on at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.phrases.is_empty() {
            return Err(ConfigError::EmptyPhraseList);
        }
        if self.catalog_limit == 0 {
            return Err(ConfigError::ZeroCatalogLimit);
        }
        let mut seen = FnvHashSet::default();
        for p in &self.projects {
            if !seen.insert(p.id) {
                return Err(ConfigError::DuplicateProjectId(p.id));
            }
        }
        Ok(())
    }
}
