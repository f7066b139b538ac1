use crate::{attribute::is_rewritten, element::Element, serializer::Serializer};

const HEADER: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const TRAILER: &str = "";

/// Transforms a layout into text with dimension literals replaced by dimension
/// resource references.
pub fn transform(root: &Element) -> String {
    let mut output = String::from(HEADER);

    Serializer::new(&mut output).serialize(root, 0);
    output.push_str(TRAILER);

    output
}

/// Counts attributes whose values [`transform`] rewrites.
pub fn count_rewrites(element: &Element) -> usize {
    if element.name().is_empty() {
        return 0;
    }

    element
        .attributes()
        .filter(|attribute| is_rewritten(attribute))
        .count()
        + element.children().map(count_rewrites).sum::<usize>()
}
