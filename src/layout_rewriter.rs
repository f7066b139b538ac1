use crate::{
    config::Config,
    error::Error,
    file_output::{FileOutput, FileSuccess},
    layout_path::is_layout_path,
    transform::{count_rewrites, transform},
    xml_parser::{ParseError, XmlParser},
};
use async_recursion::async_recursion;
use futures::{Stream, StreamExt, stream};
use itertools::Itertools;
use log::{debug, error, trace, warn};
use std::path::{Path, PathBuf};
use tokio::fs::{canonicalize, metadata, read_dir, read_to_string, write};

/// A layout rewriter replacing dimension literals in layout files.
pub struct LayoutRewriter {
    config: Config,
    parser: XmlParser,
}

impl LayoutRewriter {
    /// Creates a layout rewriter.
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            parser: XmlParser::new(),
        }
    }

    /// Rewrites all layout files under root paths.
    ///
    /// Roots and directories that cannot be read are reported as failed
    /// outputs before the rewritten files.
    pub async fn rewrite(&self) -> impl Stream<Item = FileOutput> + '_ {
        let (files, failures) = self.collect_files().await;

        debug!("found {} layout files", files.len());

        stream::iter(failures).chain(
            stream::iter(files)
                .map(|path| self.rewrite_file(path))
                .buffered(self.config.concurrency()),
        )
    }

    /// Collects layout files under root paths, returning the files and
    /// failures of unreadable paths.
    pub async fn collect_files(&self) -> (Vec<PathBuf>, Vec<FileOutput>) {
        let mut files = vec![];
        let mut failures = vec![];

        for root in self.config.roots() {
            if let Err(error) = self
                .collect_root_files(root, &mut files, &mut failures)
                .await
            {
                failures.push(Self::fail(root.to_path_buf(), error));
            }
        }

        (files.into_iter().unique().collect(), failures)
    }

    async fn collect_root_files(
        &self,
        root: &Path,
        files: &mut Vec<PathBuf>,
        failures: &mut Vec<FileOutput>,
    ) -> Result<(), Error> {
        let root = canonicalize(root).await?;
        let directory = metadata(&root).await?.is_dir();

        if !is_layout_path(&root, directory) {
            warn!("skipping non-layout path {}", root.display());
        } else if self.config.is_excluded(&root) {
            debug!("skipping excluded path {}", root.display());
        } else if directory {
            self.collect_directory_files(&root, files, failures).await?;
        } else {
            files.push(root);
        }

        Ok(())
    }

    #[async_recursion]
    async fn collect_directory_files(
        &self,
        directory: &Path,
        files: &mut Vec<PathBuf>,
        failures: &mut Vec<FileOutput>,
    ) -> Result<(), Error> {
        trace!("reading directory {}", directory.display());

        let mut entries = vec![];
        let mut reader = read_dir(directory).await?;

        while let Some(entry) = reader.next_entry().await? {
            entries.push((entry.path(), entry.file_type().await?.is_dir()));
        }

        entries.sort();

        for (path, directory) in entries {
            if !is_layout_path(&path, directory) || self.config.is_excluded(&path) {
                trace!("skipping {}", path.display());
            } else if directory {
                if let Err(error) = self
                    .collect_directory_files(&path, files, failures)
                    .await
                {
                    failures.push(Self::fail(path, error));
                }
            } else {
                files.push(path);
            }
        }

        Ok(())
    }

    fn fail(path: PathBuf, error: Error) -> FileOutput {
        error!("failed to read {}: {error}", path.display());

        FileOutput::new(path, Err(error))
    }

    /// Rewrites a layout file.
    pub async fn rewrite_file(&self, path: PathBuf) -> FileOutput {
        let result = self.rewrite_path(&path).await;

        if let Err(error) = &result {
            error!("failed to rewrite {}: {error}", path.display());
        }

        FileOutput::new(path, result)
    }

    async fn rewrite_path(&self, path: &Path) -> Result<FileSuccess, Error> {
        trace!("reading layout {}", path.display());

        let (content, rewritten) = match self.rewrite_text(&read_to_string(path).await?) {
            Err(ParseError::MissingRootElement) => {
                debug!("skipping layout without root element {}", path.display());
                return Ok(FileSuccess::new(0));
            }
            result => result?,
        };

        if self.config.dry_run() {
            return Ok(FileSuccess::new(rewritten).set_content(Some(content)));
        }

        write(path, content).await?;
        debug!("rewrote {rewritten} attributes in {}", path.display());

        Ok(FileSuccess::new(rewritten))
    }

    /// Rewrites layout text, returning the new text and a number of rewritten
    /// attributes.
    pub fn rewrite_text(&self, text: &str) -> Result<(String, usize), ParseError> {
        let root = self.parser.parse(text)?;

        Ok((transform(&root), count_rewrites(&root)))
    }
}
