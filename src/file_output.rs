use crate::error::Error;
use std::path::{Path, PathBuf};

/// A result of rewriting a layout file.
#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    result: Result<FileSuccess, Error>,
}

impl FileOutput {
    /// Creates a file output.
    pub const fn new(path: PathBuf, result: Result<FileSuccess, Error>) -> Self {
        Self { path, result }
    }

    /// Returns a file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns a rewrite result.
    pub const fn result(&self) -> &Result<FileSuccess, Error> {
        &self.result
    }

    /// Returns `true` if the rewrite failed.
    pub const fn is_err(&self) -> bool {
        self.result.is_err()
    }
}

/// A successful rewrite of a layout file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FileSuccess {
    rewritten: usize,
    content: Option<String>,
}

impl FileSuccess {
    /// Creates a successful rewrite.
    pub const fn new(rewritten: usize) -> Self {
        Self {
            rewritten,
            content: None,
        }
    }

    /// Returns a number of rewritten attributes.
    pub const fn rewritten(&self) -> usize {
        self.rewritten
    }

    /// Returns rewritten content not written to a file.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Sets rewritten content not written to a file.
    pub fn set_content(mut self, content: Option<String>) -> Self {
        self.content = content;
        self
    }
}
