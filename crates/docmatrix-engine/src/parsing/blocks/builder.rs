use log::debug;

use crate::models::{Block, ListType};
use crate::parsing::{ParseOptions, UnterminatedFence};

use super::{
    classify::{LineClass, LineKind},
    kinds::{CodeFence, Heading},
};

/// Blank lines in a row that close an open list.
const LIST_BREAKING_BLANKS: usize = 2;

/// A fenced code block whose closing fence has not been seen yet.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenCode {
    language: String,
    lines: Vec<String>,
}

/// The list that new items of the same type are appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenList {
    /// Position of the list block in the output.
    index: usize,
    list_type: ListType,
}

/// Phase 2 of block parsing: reduces classified lines into blocks.
///
/// The running state is an open code block, an open list, whether the
/// previous non-blank line was a list item, and the current run of blank
/// lines. Lists are deliberately lenient: a single non-list line directly
/// after an item does not close the list, so a later item of the same type
/// still joins it.
pub struct BlockBuilder {
    unterminated_fence: UnterminatedFence,
    code: Option<OpenCode>,
    list: Option<OpenList>,
    last_was_list: bool,
    blank_run: usize,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::with_options(&ParseOptions::default())
    }

    pub fn with_options(options: &ParseOptions) -> Self {
        Self {
            unterminated_fence: options.unterminated_fence,
            code: None,
            list: None,
            last_was_list: false,
            blank_run: 0,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if !c.is_blank() {
            self.blank_run = 0;
        }

        if let Some(code) = self.code.as_mut() {
            if matches!(c.kind, LineKind::Fence { .. }) {
                self.close_code();
            } else {
                code.lines.push(c.raw.to_string());
            }
            return;
        }

        match c.kind {
            LineKind::Blank => {
                self.blank_run += 1;
                if self.blank_run >= LIST_BREAKING_BLANKS {
                    self.close_list();
                }
            }
            LineKind::Fence { info } => {
                self.code = Some(OpenCode {
                    language: CodeFence::language(info),
                    lines: vec![],
                });
            }
            LineKind::Heading { level, text } => {
                self.close_list();
                self.out.push(Block::Heading {
                    level,
                    text: text.to_string(),
                    id: Heading::slug(text),
                });
            }
            LineKind::ListItem { list_type, text } => self.push_list_item(list_type, text),
            LineKind::ThematicBreak => {
                self.leave_list();
                self.out.push(Block::HorizontalRule);
            }
            LineKind::BlockQuote { text } => {
                self.leave_list();
                self.out.push(Block::Blockquote {
                    text: text.to_string(),
                });
            }
            LineKind::Text { text } => {
                self.leave_list();
                self.out.push(Block::Paragraph {
                    text: text.to_string(),
                });
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        if let Some(code) = self.code.take() {
            match self.unterminated_fence {
                UnterminatedFence::Flush => self.out.push(Block::Code {
                    language: code.language,
                    content: code.lines,
                }),
                UnterminatedFence::Drop => debug!(
                    "dropping unterminated {} code block ({} lines)",
                    code.language,
                    code.lines.len()
                ),
            }
        }
        self.out
    }

    fn push_list_item(&mut self, list_type: ListType, text: &str) {
        let open = self.list.filter(|l| l.list_type == list_type);
        let index = match open {
            Some(l) => l.index,
            None => {
                self.out.push(Block::List {
                    list_type,
                    items: vec![],
                });
                let index = self.out.len() - 1;
                self.list = Some(OpenList { index, list_type });
                index
            }
        };

        if let Some(Block::List { items, .. }) = self.out.get_mut(index) {
            items.push(text.to_string());
        }
        self.last_was_list = true;
    }

    fn close_code(&mut self) {
        if let Some(code) = self.code.take() {
            self.out.push(Block::Code {
                language: code.language,
                content: code.lines,
            });
        }
    }

    fn close_list(&mut self) {
        self.list = None;
        self.last_was_list = false;
    }

    /// Called for non-list lines: the list survives only if the previous
    /// line was one of its items.
    fn leave_list(&mut self) {
        if !self.last_was_list {
            self.list = None;
        }
        self.last_was_list = false;
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
