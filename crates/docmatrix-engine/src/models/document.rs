use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Whether a list was written with bullet markers or numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    /// `-`, `*` or `+` markers.
    Unordered,
    /// `1.`, `2.`, ... markers.
    Ordered,
}

/// A block-level node of a parsed Markdown document.
///
/// Serializes with an internal `type` tag so the JSON/YAML renderings read
/// `{"type": "heading", "level": 1, ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Heading {
        /// 1 to 6, the number of leading `#`.
        level: u8,
        text: String,
        /// Anchor slug derived from `text`. Not unique across a document.
        id: String,
    },
    List {
        #[serde(rename = "listType")]
        list_type: ListType,
        items: Vec<String>,
    },
    Code {
        /// Fence info string, `"text"` when the fence has none.
        language: String,
        /// Lines between the fences, verbatim apart from a trailing `\r`.
        content: Vec<String>,
    },
    #[serde(rename = "hr")]
    HorizontalRule,
    Blockquote {
        text: String,
    },
    Paragraph {
        text: String,
    },
}

impl Block {
    /// The serialized `type` tag of this block.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::List { .. } => "list",
            Block::Code { .. } => "code",
            Block::HorizontalRule => "hr",
            Block::Blockquote { .. } => "blockquote",
            Block::Paragraph { .. } => "paragraph",
        }
    }
}

/// The result of parsing Markdown: a flat, ordered sequence of blocks plus the
/// untouched source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    metadata: Map<String, Value>,
    content: Vec<Block>,
    raw: String,
}

impl Document {
    /// Create a document with empty metadata.
    pub fn new(content: Vec<Block>, raw: impl Into<String>) -> Self {
        Self {
            metadata: Map::new(),
            content,
            raw: raw.into(),
        }
    }

    /// Front-matter metadata. Always empty for now.
    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    /// Blocks in source order.
    pub fn content(&self) -> &[Block] {
        &self.content
    }

    /// The exact input the document was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}
