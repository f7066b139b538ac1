use core::fmt::{self, Display, Formatter};
use regex::Regex;
use std::sync::LazyLock;

const RESOURCE_PREFIX: &str = "@dimen/";
const FONT_SIZE_ATTRIBUTE: &str = "textSize";

static LITERAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[1-9][0-9]*(dp|px|sp|dip)").expect("valid literal pattern"));
static UNIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("dp|px|sp|dip").expect("valid unit pattern"));

/// Returns `true` if a value contains a dimension literal.
pub fn is_dimension(value: &str) -> bool {
    LITERAL_PATTERN.is_match(value)
}

/// A kind of dimension resource.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DimensionKind {
    /// A font size.
    Text,
    /// Any other layout dimension.
    Layout,
}

impl DimensionKind {
    /// Classifies a dimension by the name of an attribute holding it.
    pub fn from_attribute_name(name: &str) -> Self {
        if name.contains(FONT_SIZE_ATTRIBUTE) {
            Self::Text
        } else {
            Self::Layout
        }
    }

    const fn prefix(self) -> &'static str {
        match self {
            Self::Text => "sp_",
            Self::Layout => "dp_",
        }
    }
}

/// An attribute value containing a dimension literal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DimensionLiteral<'a> {
    value: &'a str,
}

impl<'a> DimensionLiteral<'a> {
    /// Finds a dimension literal in a value.
    pub fn find(value: &'a str) -> Option<Self> {
        is_dimension(value).then_some(Self { value })
    }

    /// Returns the original value.
    pub const fn value(&self) -> &'a str {
        self.value
    }

    /// Returns text before the first unit token in the value.
    ///
    /// The first unit token is not necessarily the one of the matched literal.
    /// For example, `dp10dp` has an empty numeric prefix.
    pub fn numeric_prefix(&self) -> &'a str {
        UNIT_PATTERN.split(self.value).next().unwrap_or_default()
    }

    /// Encodes the literal into a dimension resource reference.
    pub fn encode(&self, kind: DimensionKind) -> DimensionReference {
        DimensionReference::new(kind, self.numeric_prefix())
    }
}

/// A reference to a dimension resource, such as `@dimen/dp_10`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DimensionReference {
    kind: DimensionKind,
    name: String,
}

impl DimensionReference {
    /// Creates a reference from a numeric prefix of a dimension literal.
    pub fn new(kind: DimensionKind, magnitude: &str) -> Self {
        Self {
            kind,
            name: magnitude
                .replace('-', "m_")
                .replace('.', "_")
                .replace('+', ""),
        }
    }

    /// Returns a dimension kind.
    pub const fn kind(&self) -> DimensionKind {
        self.kind
    }

    /// Returns a resource name without its kind prefix.
    #[allow(clippy::missing_const_for_fn)]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for DimensionReference {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{RESOURCE_PREFIX}{}{}",
            self.kind.prefix(),
            self.name
        )
    }
}
