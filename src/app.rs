use std::sync::Arc;

use crate::config::Config;
use crate::routing::Router;
use crate::static_files::StaticFiles;
use crate::template::Templates;
use crate::views;

/// Everything a worker needs besides its connection. Shared read-only
/// between all workers.
pub struct App {
    pub router: Router,
    pub static_files: StaticFiles,
}

impl App {
    pub fn new(router: Router, static_files: StaticFiles) -> Self {
        Self {
            router,
            static_files,
        }
    }

    /// The application served by the binary, wired from configuration.
    ///
    /// Fails when the templates directory cannot be read.
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let templates = Arc::new(Templates::load(&cfg.templates_dir)?);
        Ok(Self::new(
            views::url_patterns(templates),
            StaticFiles::new(&cfg.static_root),
        ))
    }
}
