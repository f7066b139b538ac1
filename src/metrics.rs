use crate::file_output::FileOutput;

/// Rewrite metrics.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Metrics {
    success: usize,
    error: usize,
    rewritten: usize,
}

impl Metrics {
    /// Creates metrics.
    pub const fn new(success: usize, error: usize, rewritten: usize) -> Self {
        Self {
            success,
            error,
            rewritten,
        }
    }

    /// Returns a number of rewritten files.
    pub const fn success(&self) -> usize {
        self.success
    }

    /// Returns a number of failed files.
    pub const fn error(&self) -> usize {
        self.error
    }

    /// Returns a total number of files.
    pub const fn total(&self) -> usize {
        self.success + self.error
    }

    /// Returns a number of rewritten attributes.
    pub const fn rewritten(&self) -> usize {
        self.rewritten
    }

    /// Returns `true` if any file failed.
    pub const fn has_error(&self) -> bool {
        self.error > 0
    }

    /// Adds a file output.
    pub fn add(&mut self, output: &FileOutput) {
        match output.result() {
            Ok(success) => {
                self.success += 1;
                self.rewritten += success.rewritten();
            }
            Err(_) => self.error += 1,
        }
    }
}
