use crate::{
    error::ConvertError,
    nodes::{InlineSpan, OutputNode, TagNames},
    parsing::inline::{render_span_with, tokenize},
};

use super::{
    classify::classify,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::{Block, BlockKind},
};

/// Compiles one block with the default tag vocabulary.
pub fn compile_block(block: &Block<'_>) -> Result<OutputNode, ConvertError> {
    compile_block_with(block, TagNames::builtin())
}

/// Compiles one block into a parent node, dispatching on its [`BlockKind`].
///
/// Ordered-list lines without a `. ` separator are skipped.
pub fn compile_block_with(block: &Block<'_>, tags: &TagNames) -> Result<OutputNode, ConvertError> {
    match classify(block) {
        BlockKind::Paragraph => {
            inline_parent(&tags.paragraph, &Paragraph::join(block.lines()), tags)
        }
        BlockKind::Heading => {
            let Some((level, text)) = Heading::split(block.text()) else {
                return Err(ConvertError::Structure(
                    "heading block has no heading marker".to_string(),
                ));
            };
            inline_parent(&tags.heading(level), text, tags)
        }
        BlockKind::Code => {
            let code = InlineSpan::plain(CodeFence::strip(block.text()));
            let inner = OutputNode::parent(&tags.code, vec![render_span_with(&code, tags)?])?;
            OutputNode::parent(&tags.preformatted, vec![inner])
        }
        BlockKind::Quote => {
            let text = block
                .lines()
                .map(BlockQuote::strip)
                .collect::<Vec<_>>()
                .join(" ");
            inline_parent(&tags.blockquote, &text, tags)
        }
        BlockKind::UnorderedList => list(
            &tags.bulleted_list,
            block.lines().map(UnorderedList::item_text),
            tags,
        ),
        BlockKind::OrderedList => list(
            &tags.numbered_list,
            block.lines().filter_map(OrderedList::item_text),
            tags,
        ),
    }
}

fn inline_children(text: &str, tags: &TagNames) -> Result<Vec<OutputNode>, ConvertError> {
    tokenize(text)
        .iter()
        .map(|span| render_span_with(span, tags))
        .collect()
}

fn inline_parent(tag: &str, text: &str, tags: &TagNames) -> Result<OutputNode, ConvertError> {
    OutputNode::parent(tag, inline_children(text, tags)?)
}

fn list<'a>(
    tag: &str,
    items: impl Iterator<Item = &'a str>,
    tags: &TagNames,
) -> Result<OutputNode, ConvertError> {
    let items = items
        .map(|item| inline_parent(&tags.list_item, item, tags))
        .collect::<Result<Vec<_>, _>>()?;
    OutputNode::parent(tag, items)
}
