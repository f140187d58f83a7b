use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;

/// HTML templates, read from the templates directory once at startup.
///
/// Placeholders are written `{name}`; anything in braces that is not in the
/// context is left untouched.
#[derive(Debug, Clone, Default)]
pub struct Templates {
    sources: HashMap<String, String>,
}

impl Templates {
    /// Loads every file directly inside `dir`, keyed by file name.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("failed to open templates directory {}", dir.display()))?;

        let mut sources = HashMap::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to load template {}", path.display()))?;
            sources.insert(name.to_string(), source);
        }

        tracing::debug!(dir = %dir.display(), count = sources.len(), "Templates loaded");
        Ok(Self { sources })
    }

    /// Builds a set from in-memory sources.
    pub fn from_sources<I, K, V>(sources: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            sources: sources
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn render(&self, name: &str, context: &[(&str, &str)]) -> anyhow::Result<String> {
        let source = self
            .sources
            .get(name)
            .with_context(|| format!("unknown template {}", name))?;

        Ok(fill(source, context))
    }
}

fn fill(source: &str, context: &[(&str, &str)]) -> String {
    context.iter().fold(source.to_string(), |out, (key, value)| {
        out.replace(&format!("{{{}}}", key), value)
    })
}
