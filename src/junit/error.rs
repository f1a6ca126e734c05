use std::path::PathBuf;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Report file missing or unreadable
    #[error("could not read report '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed XML
    #[error("malformed JUnit XML")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute syntax
    #[error("malformed XML attribute")]
    Attribute(#[from] AttrError),

    /// Root element is something other than `<testsuites>`
    #[error("expected <testsuites> root element, found <{0}>")]
    UnexpectedRoot(String),

    /// A count attribute that isn't a non-negative integer
    #[error("invalid {attribute}=\"{value}\" on <{element}>")]
    InvalidCount {
        element: String,
        attribute: String,
        value: String,
    },

    /// Input ended inside an open element
    #[error("report ends before </{0}>")]
    Unclosed(String),

    /// Document has no root element
    #[error("report contains no XML elements")]
    Empty,
}
