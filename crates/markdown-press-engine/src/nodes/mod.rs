//! # Node Model
//!
//! Value types flowing through the compiler.
//!
//! - **`span`**: `InlineSpan` and its `SpanKind`, produced by the inline tokenizer
//! - **`output`**: `OutputNode` tree (`Leaf` / `Parent`) and its serializer
//! - **`tags`**: `TagNames`, the element vocabulary the compiler emits
//!
//! Spans are transient: the tokenizer creates them and the block compiler
//! consumes them immediately. Output nodes own their children outright, so a
//! finished tree is acyclic and every node has exactly one parent.

pub mod output;
pub mod span;
pub mod tags;

pub use output::{Attributes, Leaf, OutputNode, Parent};
pub use span::{InlineSpan, SpanKind};
pub use tags::TagNames;
