use log::trace;

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::{Block, BlockKind},
};

/// Classifies a block by the first matching predicate, in priority order:
/// code, heading, quote, unordered list, ordered list, paragraph.
///
/// The order is load-bearing: a fenced block whose body lines start with
/// `>` is still code.
pub fn classify(block: &Block<'_>) -> BlockKind {
    let lines: Vec<&str> = block.lines().collect();
    let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
        return BlockKind::Paragraph;
    };

    let kind = if CodeFence::encloses(first, last) {
        BlockKind::Code
    } else if Heading::level(first).is_some() {
        BlockKind::Heading
    } else if lines.iter().all(|l| BlockQuote::opens(l)) {
        BlockKind::Quote
    } else if lines.iter().all(|l| UnorderedList::opens(l)) {
        BlockKind::UnorderedList
    } else if OrderedList::is_sequential(lines.iter().copied()) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    };

    trace!("classified {} line block as {kind:?}", lines.len());
    kind
}
