use crate::file_output::{FileOutput, FileSuccess};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct RenderedFileOutput<'a> {
    path: &'a Path,
    #[serde(flatten)]
    result: RenderedFileResult<'a>,
}

impl<'a> From<&'a FileOutput> for RenderedFileOutput<'a> {
    fn from(output: &'a FileOutput) -> Self {
        Self {
            path: output.path(),
            result: match output.result() {
                Ok(success) => RenderedFileResult::Rewritten(success.into()),
                Err(error) => RenderedFileResult::Failed {
                    error: error.to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RenderedFileResult<'a> {
    Rewritten(RenderedFileSuccess<'a>),
    Failed { error: String },
}

#[derive(Debug, Serialize)]
struct RenderedFileSuccess<'a> {
    rewritten: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
}

impl<'a> From<&'a FileSuccess> for RenderedFileSuccess<'a> {
    fn from(success: &'a FileSuccess) -> Self {
        Self {
            rewritten: success.rewritten(),
            content: success.content(),
        }
    }
}
