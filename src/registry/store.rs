//! Name → logger storage.

use std::sync::Arc;

use arc_swap::ArcSwap;
use dashmap::DashMap;
use thiserror::Error;

use crate::logger::format::LogFormat;
use crate::logger::level::Level;
use crate::logger::Logger;
use crate::registry::defaults::Defaults;
use crate::sink::OutputSink;

/// Level names that matched no entry in the level table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown level names: {}", format_pairs(.0))]
pub struct UnknownLevels(pub Vec<(String, String)>);

fn format_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(logger, level)| format!("{} = {:?}", logger, level))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Keeps exactly one [`Logger`] per name.
pub struct LoggerRegistry {
    loggers: DashMap<String, Arc<Logger>>,
    defaults: ArcSwap<Defaults>,
}

impl std::fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("loggers", &self.names())
            .field("defaults", &*self.defaults.load())
            .finish()
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new(Defaults::default())
    }
}

impl LoggerRegistry {
    /// Create an empty registry with the given defaults.
    pub fn new(defaults: Defaults) -> Self {
        Self {
            loggers: DashMap::new(),
            defaults: ArcSwap::from_pointee(defaults),
        }
    }

    /// Return the logger for `name`, creating it from the current defaults
    /// if it does not exist yet.
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        if let Some(existing) = self.loggers.get(name) {
            return Arc::clone(existing.value());
        }

        // The entry holds the shard's write lock until it is dropped, so a
        // racing caller either sees our insert or performs its own exactly once.
        let entry = self.loggers.entry(name.to_string()).or_insert_with(|| {
            let defaults = self.defaults.load();
            tracing::debug!(logger = %name, level = %defaults.level, "Creating logger");
            Arc::new(Logger::new(name, &defaults))
        });
        Arc::clone(entry.value())
    }

    /// Whether a logger named `name` has been created.
    pub fn contains(&self, name: &str) -> bool {
        self.loggers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    /// Names of all registered loggers, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.iter().map(|r| r.key().clone()).collect();
        names.sort();
        names
    }

    // --- Defaults ---

    /// Snapshot of the current defaults.
    pub fn defaults(&self) -> Arc<Defaults> {
        self.defaults.load_full()
    }

    /// Replace all defaults. Existing loggers are unaffected.
    pub fn set_defaults(&self, defaults: Defaults) {
        self.defaults.store(Arc::new(defaults));
    }

    fn update_defaults(&self, f: impl Fn(&mut Defaults)) {
        self.defaults.rcu(|current| {
            let mut next = Defaults::clone(current);
            f(&mut next);
            next
        });
    }

    pub fn set_default_level(&self, level: Level) {
        self.update_defaults(|d| d.level = level);
    }

    pub fn set_default_escalate_on_error(&self, escalate: bool) {
        self.update_defaults(|d| d.escalate_on_error = escalate);
    }

    pub fn set_default_format(&self, format: LogFormat) {
        self.update_defaults(|d| d.format = format.clone());
    }

    pub fn set_default_sink(&self, sink: Arc<dyn OutputSink>) {
        self.update_defaults(|d| d.sink = Arc::clone(&sink));
    }

    // --- Bulk configuration ---

    /// Resolve a level display name, falling back to the default level when
    /// the name is not in the level table.
    pub fn resolve_level(&self, name: &str) -> Level {
        match Level::from_name(name) {
            Some(level) => level,
            None => {
                let fallback = self.defaults.load().level;
                tracing::warn!(
                    level_name = %name,
                    fallback = %fallback,
                    "Unknown level name, using default level"
                );
                fallback
            }
        }
    }

    /// Set the threshold of each named logger, creating loggers as needed.
    /// Unknown level names resolve to the default level.
    pub fn configure_levels<I, K, V>(&self, levels: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (logger, level_name) in levels {
            let level = self.resolve_level(level_name.as_ref());
            self.get_logger(logger.as_ref()).set_threshold(level);
        }
    }

    /// Like [`configure_levels`](Self::configure_levels), but rejects the
    /// whole batch without applying anything if any level name is unknown.
    pub fn try_configure_levels<I, K, V>(&self, levels: I) -> Result<(), UnknownLevels>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut resolved = Vec::new();
        let mut unknown = Vec::new();

        for (logger, level_name) in levels {
            let (logger, level_name) = (logger.as_ref(), level_name.as_ref());
            match Level::from_name(level_name) {
                Some(level) => resolved.push((logger.to_string(), level)),
                None => unknown.push((logger.to_string(), level_name.to_string())),
            }
        }

        if !unknown.is_empty() {
            return Err(UnknownLevels(unknown));
        }

        for (logger, level) in resolved {
            self.get_logger(&logger).set_threshold(level);
        }
        Ok(())
    }
}
