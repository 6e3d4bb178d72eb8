use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::pages::landing::Section;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("{field} must be a valid email address")]
    InvalidEmail { field: &'static str },
    #[error("{value:?} is not an option for {field}")]
    UnknownOption { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("we could not send your message: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetLoadError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("failed to fetch chat bundle from {src}")]
    Fetch { src: String },
    #[error("chat runtime did not expose an entry point")]
    EntryPointMissing,
    #[error("chat config could not be encoded: {0}")]
    Config(String),
}

impl From<JsValue> for WidgetLoadError {
    fn from(value: JsValue) -> Self {
        WidgetLoadError::Dom(format!("{:?}", value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout has no header")]
    MissingHeader,
    #[error("layout has no footer")]
    MissingFooter,
    #[error("header must be the first section")]
    HeaderNotFirst,
    #[error("footer must be the last section")]
    FooterNotLast,
    #[error("section {0:?} appears more than once")]
    Duplicate(Section),
    #[error("unknown layout variant {0:?}")]
    UnknownVariant(String),
}
