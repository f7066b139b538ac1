use crate::element::{Attribute, Element};
use alloc::string::FromUtf8Error;
use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use quick_xml::{
    Reader,
    events::{BytesStart, Event, attributes::AttrError},
};

const QUOTE_ENTITY: &str = "&quot;";

/// A layout XML parser.
///
/// Attribute values are kept as written in the source without unescaping, so
/// that they serialize back into the same text. Double quotes in single-quoted
/// values are escaped as they are serialized in double quotes. Text, comments, CDATA sections,
/// declarations, and processing instructions are dropped.
#[derive(Debug, Default)]
pub struct XmlParser {}

impl XmlParser {
    /// Creates a layout XML parser.
    pub const fn new() -> Self {
        Self {}
    }

    /// Parses a layout XML document into its root element.
    pub fn parse(&self, text: &str) -> Result<Element, ParseError> {
        let mut reader = Reader::from_str(text);
        let mut stack = Vec::<Element>::new();
        let mut root = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => stack.push(Self::parse_element(&start)?),
                Event::Empty(start) => {
                    Self::attach(Self::parse_element(&start)?, &mut stack, &mut root)?
                }
                Event::End(end) => {
                    let Some(element) = stack.pop() else {
                        return Err(ParseError::UnexpectedEndTag(String::from_utf8(
                            end.name().as_ref().to_vec(),
                        )?));
                    };

                    Self::attach(element, &mut stack, &mut root)?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(element) = stack.pop() {
            return Err(ParseError::UnclosedElement(element.name().into()));
        }

        root.ok_or(ParseError::MissingRootElement)
    }

    fn parse_element(start: &BytesStart) -> Result<Element, ParseError> {
        Ok(Element::new(
            String::from_utf8(start.name().as_ref().to_vec())?,
            start
                .attributes()
                .map(|attribute| -> Result<Attribute, ParseError> {
                    let attribute = attribute?;

                    Ok(Attribute::new(
                        String::from_utf8(attribute.key.as_ref().to_vec())?,
                        // Only single-quoted values contain double quotes.
                        String::from_utf8(attribute.value.into_owned())?
                            .replace('"', QUOTE_ENTITY),
                    ))
                })
                .collect::<Result<Vec<_>, _>>()?,
            vec![],
        ))
    }

    fn attach(
        element: Element,
        stack: &mut [Element],
        root: &mut Option<Element>,
    ) -> Result<(), ParseError> {
        if let Some(parent) = stack.last_mut() {
            parent.push_child(element);
        } else if root.is_some() {
            return Err(ParseError::MultipleRootElements(element.name().into()));
        } else {
            *root = Some(element);
        }

        Ok(())
    }
}

/// A layout XML parse error.
#[derive(Debug)]
pub enum ParseError {
    /// An invalid attribute.
    Attribute(AttrError),
    /// A missing root element.
    MissingRootElement,
    /// An extra root element.
    MultipleRootElements(String),
    /// An element without its end tag.
    UnclosedElement(String),
    /// An end tag without its start tag.
    UnexpectedEndTag(String),
    /// A name or value not in UTF-8.
    Utf8(FromUtf8Error),
    /// An XML syntax error.
    Xml(quick_xml::Error),
}

impl Error for ParseError {}

impl Display for ParseError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attribute(error) => write!(formatter, "{error}"),
            Self::MissingRootElement => write!(formatter, "missing root element"),
            Self::MultipleRootElements(name) => {
                write!(formatter, "multiple root elements: {name}")
            }
            Self::UnclosedElement(name) => write!(formatter, "unclosed element: {name}"),
            Self::UnexpectedEndTag(name) => write!(formatter, "unexpected end tag: {name}"),
            Self::Utf8(error) => write!(formatter, "{error}"),
            Self::Xml(error) => write!(formatter, "{error}"),
        }
    }
}

impl From<AttrError> for ParseError {
    fn from(error: AttrError) -> Self {
        Self::Attribute(error)
    }
}

impl From<FromUtf8Error> for ParseError {
    fn from(error: FromUtf8Error) -> Self {
        Self::Utf8(error)
    }
}

impl From<quick_xml::Error> for ParseError {
    fn from(error: quick_xml::Error) -> Self {
        Self::Xml(error)
    }
}
