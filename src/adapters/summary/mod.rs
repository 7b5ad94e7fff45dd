//! Result summarizer adapters.

mod template;

pub use template::{format_value, TemplateSummarizer};
