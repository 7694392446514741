//! End-to-end checks of the parsing pipeline inside the crate.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    error::ConvertError,
    nodes::{Attributes, Leaf, OutputNode, SpanKind},
    parsing::{
        blocks::{BlockKind, classify},
        compile_document, extract_title,
        inline::tokenize,
        split_blocks,
    },
};

#[test]
fn split_blocks_drops_blank_edges() {
    let blocks: Vec<_> = split_blocks("\n\nA\n\nB\n\n")
        .iter()
        .map(|b| b.text())
        .collect();
    assert_eq!(blocks, vec!["A", "B"]);
}

#[test]
fn split_blocks_keeps_order_and_inner_lines() {
    let md = "# This is a heading\n\nThis is a paragraph of text. It has some **bold** and _italic_ words inside of it.\n\n- This is the first list item in a list block\n- This is a list item\n- This is another list item";
    let blocks: Vec<_> = split_blocks(md).iter().map(|b| b.text()).collect();
    assert_eq!(
        blocks,
        vec![
            "# This is a heading",
            "This is a paragraph of text. It has some **bold** and _italic_ words inside of it.",
            "- This is the first list item in a list block\n- This is a list item\n- This is another list item",
        ]
    );
}

#[test]
fn split_blocks_collapses_extra_blank_lines() {
    let blocks: Vec<_> = split_blocks("one\n\n\n\n\ntwo")
        .iter()
        .map(|b| b.text())
        .collect();
    assert_eq!(blocks, vec!["one", "two"]);
}

#[test]
fn empty_document_has_no_children() {
    let doc = compile_document("").unwrap();
    assert_eq!(doc.serialize(), "<document></document>");
    assert!(compile_document("\n\n  \n\n").unwrap().children().is_empty());
}

#[rstest]
#[case("1. a\n3. b", BlockKind::Paragraph)]
#[case("```\n> not a quote\n```", BlockKind::Code)]
fn classification_edge_cases(#[case] text: &str, #[case] kind: BlockKind) {
    let blocks = split_blocks(text);
    assert_eq!(blocks.len(), 1);
    assert_eq!(classify(&blocks[0]), kind);
}

#[test]
fn extract_title_finds_first_level_one_heading() {
    assert_eq!(extract_title("intro\n# Title\nmore"), Ok("Title".to_string()));
    assert_eq!(
        extract_title("## Sub\n#NoSpace\n#   Padded  \n# Later"),
        Ok("Padded".to_string())
    );
}

#[test]
fn extract_title_without_heading() {
    assert_eq!(
        extract_title("no heading\n## only level two"),
        Err(ConvertError::NoTitleFound)
    );
    assert_eq!(extract_title(""), Err(ConvertError::NoTitleFound));
}

#[test]
fn heading_and_paragraph_document() {
    let doc = compile_document("# Hi\n\nThis is **bold** and a [link](http://x.com).").unwrap();

    let href: Attributes = [("href", "http://x.com")].into_iter().collect();
    let expected = OutputNode::parent(
        "document",
        vec![
            OutputNode::parent("heading-1", vec![OutputNode::text("Hi")]).unwrap(),
            OutputNode::parent(
                "paragraph",
                vec![
                    OutputNode::text("This is "),
                    OutputNode::leaf("strong", "bold"),
                    OutputNode::text(" and a "),
                    OutputNode::Leaf(Leaf::with_attributes("a", "link", href)),
                    OutputNode::text("."),
                ],
            )
            .unwrap(),
        ],
    )
    .unwrap();

    assert_eq!(doc, expected);
    assert_eq!(
        doc.serialize(),
        r#"<document><heading-1>Hi</heading-1><paragraph>This is <strong>bold</strong> and a <a href="http://x.com">link</a>.</paragraph></document>"#
    );
}

#[test]
fn code_span_text_retokenizes_as_plain() {
    let spans = tokenize("before `inside` after");
    let code: Vec<_> = spans.iter().filter(|s| s.kind == SpanKind::Code).collect();
    assert_eq!(code.len(), 1);
    assert_eq!(spans.len(), 3);

    let again = tokenize(&code[0].text);
    assert_eq!(again.len(), 1);
    assert_eq!(again[0].kind, SpanKind::Plain);
    assert_eq!(again[0].text, "inside");
}

#[rstest]
#[case("one ** two")]
#[case("**a** b **c** **")]
#[case("x ** y ** z **")]
fn odd_bold_count_is_unchanged(#[case] text: &str) {
    let spans = tokenize(text);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].kind, SpanKind::Plain);
    assert_eq!(spans[0].text, text);
}

#[test]
fn blocks_compile_in_source_order() {
    let md = "> quoted\n\n```\nraw\n```\n\n- a\n\n1. b";
    let doc = compile_document(md).unwrap();
    let tags: Vec<_> = doc.children().iter().map(|c| c.tag().unwrap()).collect();
    assert_eq!(
        tags,
        vec!["blockquote", "preformatted", "bulleted-list", "numbered-list"]
    );
}

#[test]
fn ordered_list_needs_separator_on_every_line() {
    let doc = compile_document("1. a\n2.b").unwrap();
    assert_eq!(doc.children()[0].tag(), Some("paragraph"));

    let doc = compile_document("1. kept\n2. also. kept").unwrap();
    let items = doc.children()[0].children();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].children(), &[OutputNode::text("also. kept")]);
}
