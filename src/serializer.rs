use crate::{attribute::rewrite_attribute, element::Element};

const INDENT: &str = "\t";

/// A layout serializer writing elements into a text buffer.
pub struct Serializer<'a> {
    output: &'a mut String,
}

impl<'a> Serializer<'a> {
    /// Creates a serializer appending to an output buffer.
    pub const fn new(output: &'a mut String) -> Self {
        Self { output }
    }

    /// Serializes an element and its descendants at an indentation depth.
    ///
    /// Elements with empty names are skipped together with their descendants.
    pub fn serialize(&mut self, element: &Element, depth: usize) {
        if element.name().is_empty() {
            return;
        }

        self.output.push('\n');
        self.write_indent(depth);
        self.output.push('<');
        self.output.push_str(element.name());
        self.output.push('\n');

        for (index, attribute) in element.attributes().enumerate() {
            if index > 0 {
                self.output.push('\n');
            }

            self.write_indent(depth + 1);
            self.output.push_str(&rewrite_attribute(attribute));
        }

        if element.is_leaf() {
            self.output.push_str("/>\n");
            return;
        }

        self.output.push_str(">\n");

        for child in element.children() {
            self.serialize(child, depth + 1);
        }

        self.output.push('\n');
        self.write_indent(depth);
        self.output.push_str("</");
        self.output.push_str(element.name());
        self.output.push_str(">\n");
    }

    fn write_indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.output.push_str(INDENT);
        }
    }
}
