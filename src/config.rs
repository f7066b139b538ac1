mod error;
mod serde;
mod toml;

pub use self::{
    error::ConfigError,
    serde::{SerializableConfig, compile_config},
    toml::read_config,
};
use core::ops::Deref;
use regex::Regex;
use rlimit::{Resource, getrlimit};
use std::path::{Path, PathBuf};

/// A default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "layout-dimen.toml";

const DEFAULT_MINIMUM_CONCURRENCY: usize = 64;

/// Returns a default concurrency.
pub fn default_concurrency() -> usize {
    getrlimit(Resource::NOFILE)
        .map(|(count, _)| (count / 2) as _)
        .unwrap_or(DEFAULT_MINIMUM_CONCURRENCY)
        .max(1)
}

/// A rewrite configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    roots: Vec<PathBuf>,
    excluded: Vec<Regex>,
    concurrency: Option<usize>,
    dry_run: bool,
}

impl Config {
    /// Creates a configuration.
    pub const fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            excluded: vec![],
            concurrency: None,
            dry_run: false,
        }
    }

    /// Returns root paths.
    pub fn roots(&self) -> impl Iterator<Item = &Path> {
        self.roots.iter().map(Deref::deref)
    }

    /// Returns excluded path patterns.
    pub fn excluded(&self) -> impl Iterator<Item = &Regex> {
        self.excluded.iter()
    }

    /// Returns `true` if a path is excluded.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();

        self.excluded.iter().any(|pattern| pattern.is_match(&path))
    }

    /// Returns a concurrency.
    pub fn concurrency(&self) -> usize {
        self.concurrency.unwrap_or_else(default_concurrency)
    }

    /// Returns `true` if rewritten layouts are printed instead of written.
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Sets root paths.
    pub fn set_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.roots = roots;
        self
    }

    /// Sets excluded path patterns.
    pub fn set_excluded(mut self, patterns: Vec<Regex>) -> Self {
        self.excluded = patterns;
        self
    }

    /// Sets a concurrency.
    pub const fn set_concurrency(mut self, concurrency: Option<usize>) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Sets whether rewritten layouts are printed instead of written.
    pub const fn set_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
