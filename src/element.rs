/// A layout element.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Element>,
}

impl Element {
    /// Creates an element.
    pub const fn new(name: String, attributes: Vec<Attribute>, children: Vec<Self>) -> Self {
        Self {
            name,
            attributes,
            children,
        }
    }

    /// Returns a tag name.
    #[allow(clippy::missing_const_for_fn)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns attributes in source order.
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Returns child elements in source order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = &Self> {
        self.children.iter()
    }

    /// Returns `true` if the element has no child elements.
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }
}

/// An attribute of an element.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    /// Creates an attribute.
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }

    /// Returns a qualified name.
    #[allow(clippy::missing_const_for_fn)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a raw value as written in a source document.
    #[allow(clippy::missing_const_for_fn)]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Attribute {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name.into(), value.into())
    }
}
