//! Serving files from the static root for paths no route claims.

use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Reads the file a request path points at.
    ///
    /// Returns `None` when there is nothing readable there, or when the path
    /// tries to climb out of the root with `..`.
    pub async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
        let file_path = self.resolve(path)?;

        match tokio::fs::read(&file_path).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::debug!(path = %file_path.display(), error = %e, "Static file unavailable");
                None
            }
        }
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return None;
        }
        Some(self.root.join(relative))
    }
}
