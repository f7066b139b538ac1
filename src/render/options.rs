use crate::file_output::FileOutput;

/// An output format of rewrite results.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum RenderFormat {
    /// Colored text lines.
    #[default]
    Text,
    /// JSON objects, one per line.
    Json,
}

/// Options deciding which rewrite results are rendered and how.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct RenderOptions {
    format: RenderFormat,
    show_unchanged: bool,
}

impl RenderOptions {
    /// Creates rendering options for text output of changed files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an output format.
    pub const fn format(&self) -> RenderFormat {
        self.format
    }

    /// Returns `true` if the result of a file is rendered.
    ///
    /// Files rewritten without any dimension literals and without a dry-run
    /// content are hidden unless unchanged files are shown.
    pub fn renders(&self, output: &FileOutput) -> bool {
        self.show_unchanged
            || !matches!(
                output.result(),
                Ok(success) if success.rewritten() == 0 && success.content().is_none()
            )
    }

    /// Sets an output format.
    pub const fn set_format(mut self, format: RenderFormat) -> Self {
        self.format = format;
        self
    }

    /// Shows files without rewritten attributes.
    pub const fn set_show_unchanged(mut self, show: bool) -> Self {
        self.show_unchanged = show;
        self
    }
}
