#![doc = include_str!("../README.md")]

extern crate alloc;

mod attribute;
mod config;
mod dimension;
mod element;
mod error;
mod file_output;
mod layout_path;
mod layout_rewriter;
mod metrics;
mod render;
mod serializer;
mod transform;
mod xml_parser;

pub use self::{
    attribute::{is_rewritten, rewrite_attribute, rewrite_value},
    config::*,
    dimension::{DimensionKind, DimensionLiteral, DimensionReference, is_dimension},
    element::{Attribute, Element},
    error::Error,
    file_output::{FileOutput, FileSuccess},
    layout_path::is_layout_path,
    layout_rewriter::LayoutRewriter,
    metrics::Metrics,
    render::{RenderFormat, RenderOptions, render_file},
    serializer::Serializer,
    transform::{count_rewrites, transform},
    xml_parser::{ParseError, XmlParser},
};
