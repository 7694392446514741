pub mod error;
pub mod nodes;
pub mod parsing;

// Re-export key types for easier usage
pub use error::ConvertError;
pub use nodes::{Attributes, InlineSpan, Leaf, OutputNode, Parent, SpanKind, TagNames};
pub use parsing::{
    blocks::{Block, BlockKind, classify, compile_block, compile_block_with},
    compile_document, compile_document_with, extract_title,
    inline::{render_span, render_span_with, tokenize},
    split_blocks,
};
