//! # docmatrix-engine
//!
//! Converts Markdown into a typed block document and moves structured data
//! between JSON and YAML.
//!
//! ```text
//! text → detect (optional) → parse → Document → serialize → JSON / YAML text
//! ```
//!
//! Every function is a pure function of its input: no I/O, no shared state.
//! [`convert`] is the single entry point tying the pipeline together;
//! [`validate_json`] and [`validate_yaml`] are independent pre-flight checks.

pub mod convert;
pub mod detect;
pub mod error;
pub mod formats;
pub mod models;
pub mod parsing;
pub mod validate;

// Re-export key types for easier usage
pub use convert::{Converted, convert, convert_with, markdown_to_json_string, markdown_to_yaml};
pub use detect::{ContentType, detect_content_type};
pub use error::{ConvertError, InvalidInput};
pub use formats::{Format, from_yaml, pretty_print_json, to_yaml, value_to_yaml};
pub use models::{Block, Document, ListType};
pub use parsing::{
    ParseOptions, UnterminatedFence, normalize_markdown, parse_document, parse_document_with,
};
pub use validate::{Validation, validate_json, validate_yaml};
