//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing over a restricted grammar:
//! headings, flat lists, fenced code, horizontal rules, single-line quotes and
//! single-line paragraphs.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` using only the line itself
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` folds the classified
//!    lines into `Block`s, tracking the open code block and open list
//!
//! ## Modules
//!
//! - **`kinds`**: one type per block kind owning its syntax (markers, regexes, slugs)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Blocks come out in source line order
//! - Fenced code blocks are raw zones: lines inside are never classified as
//!   other blocks
//! - Adjacent items of one list type share a single `List` block

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
