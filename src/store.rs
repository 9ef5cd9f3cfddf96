use std::collections::BTreeSet;
use std::path::Path;

use crate::errors::StoreError;
use crate::models::{Repository, SearchResult};

/// Immutable in-memory snapshot of the data file plus its language index.
///
/// There is no way to mutate a store after construction; reloading means
/// building a new one, which rebuilds the index with it.
#[derive(Debug, Clone, Default)]
pub struct RepoStore {
    repos: Vec<Repository>,
    languages: Vec<String>,
}

impl RepoStore {
    /// Read and decode a JSON array of repositories from `path`.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let data = std::fs::read_to_string(path).map_err(|source| StoreError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let repos: Vec<Repository> =
            serde_json::from_str(&data).map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_repos(repos))
    }

    pub fn from_repos(repos: Vec<Repository>) -> Self {
        let languages = language_index(&repos);
        Self { repos, languages }
    }

    /// Records in data file order.
    pub fn repos(&self) -> &[Repository] {
        &self.repos
    }

    /// Distinct non-empty language labels, sorted case-sensitively.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    pub fn search(&self, query: &str, language: &str, sort: &str) -> SearchResult {
        crate::search::search(&self.repos, query, language, sort)
    }
}

fn language_index(repos: &[Repository]) -> Vec<String> {
    repos
        .iter()
        .filter(|r| !r.language.is_empty())
        .map(|r| r.language.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
