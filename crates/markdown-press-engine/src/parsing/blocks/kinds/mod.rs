//! Block kinds owning their syntax markers.
//!
//! Classifier and compiler code calls into these; neither hardcodes `>`,
//! `- ` or the fence string.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod lists;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use lists::{OrderedList, UnorderedList};
pub use paragraph::Paragraph;
