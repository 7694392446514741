//! # Inline Parsing
//!
//! Turns the running text of a block into typed spans, then into leaves.
//!
//! ## Architecture
//!
//! Tokenizing is a fixed sequence of passes over a span list. Image and link
//! extraction come first so their labels and urls are never split on style
//! markers; bold, italic and code follow, each touching only plain spans.
//!
//! ## Modules
//!
//! - **`kinds`**: constructs owning their delimiters (`Link`, `Image`, `Delimiter`)
//! - **`cursor`**: byte `Cursor` used to scan the bracketed link/image shape
//! - **`parser`**: `tokenize()` and the individual passes
//! - **`render`**: `render_span()` turning a span into an output leaf
//!
//! ## Fail-open
//!
//! Nothing here rejects input. An unbalanced `**`, an unclosed `[label](`
//! or an ambiguous `_**` mix all come back as plain text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod render;

pub use kinds::Delimiter;
pub use parser::{
    extract_images, extract_links, split_delimiter, split_images, split_links, tokenize,
};
pub use render::{render_span, render_span_with};
