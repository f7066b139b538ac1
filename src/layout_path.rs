use std::path::Path;

const LAYOUT_DIRECTORY_SUFFIX: &str = "/layout";
const LAYOUT_FILE_SUFFIX: &str = ".xml";

/// Returns `true` if a path is a layout directory or a layout file.
pub fn is_layout_path(path: &Path, directory: bool) -> bool {
    let path = path.to_string_lossy();

    if directory {
        path.ends_with(LAYOUT_DIRECTORY_SUFFIX)
    } else {
        path.ends_with(LAYOUT_FILE_SUFFIX)
    }
}
