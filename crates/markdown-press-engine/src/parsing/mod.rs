//! # Parsing
//!
//! Document → blocks → inline spans → output tree.
//!
//! `split_blocks` cuts the document on blank lines, each block is compiled by
//! `blocks::compile_block_with`, and the results are collected under a single
//! `document` parent in source order. The whole pipeline is a pure function
//! of the input text.

pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use log::debug;

use crate::{
    error::ConvertError,
    nodes::{OutputNode, TagNames},
};

use blocks::{Block, compile_block_with};

/// Separator between blocks: one blank line.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Marker of the level-1 heading that carries the document title.
pub const TITLE_MARKER: &str = "# ";

/// Splits a document on blank lines, trimming each block and dropping empty
/// ones. Order is preserved.
pub fn split_blocks(document: &str) -> Vec<Block<'_>> {
    document
        .split(BLOCK_SEPARATOR)
        .map(Block::new)
        .filter(|b| !b.is_empty())
        .collect()
}

/// Compiles a whole document with the default tag vocabulary.
pub fn compile_document(document: &str) -> Result<OutputNode, ConvertError> {
    compile_document_with(document, TagNames::builtin())
}

/// Compiles a whole document into one root parent holding a node per block.
///
/// The first failing block aborts the conversion.
pub fn compile_document_with(document: &str, tags: &TagNames) -> Result<OutputNode, ConvertError> {
    let blocks = split_blocks(document);
    debug!("compiling document with {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(|block| compile_block_with(block, tags))
        .collect::<Result<Vec<_>, _>>()?;
    OutputNode::parent(&tags.document, children)
}

/// Returns the trimmed text of the first line starting with `# `.
pub fn extract_title(document: &str) -> Result<String, ConvertError> {
    document
        .lines()
        .find_map(|line| line.strip_prefix(TITLE_MARKER))
        .map(|title| title.trim().to_string())
        .ok_or(ConvertError::NoTitleFound)
}
