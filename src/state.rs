use std::sync::Arc;

use anyhow::Context;

use crate::config::Config;
use crate::render::Templates;
use crate::store::RepoStore;

/// Shared application state.
///
/// Built once before the listener starts and read-only afterwards; handlers
/// get cheap clones of the `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RepoStore>,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let templates = Templates::load().context("parse templates")?;

        tracing::info!("Data file: {}", config.data_file.display());
        let store = RepoStore::load(&config.data_file).context("load data")?;

        tracing::info!(
            "Loaded {} repos, {} languages",
            store.len(),
            store.languages().len()
        );

        Ok(Self::from_parts(store, templates))
    }

    pub fn from_parts(store: RepoStore, templates: Templates) -> Self {
        Self {
            store: Arc::new(store),
            templates: Arc::new(templates),
        }
    }
}
