//! # Block Parsing
//!
//! Blank-line separated blocks are classified, then compiled into output nodes.
//!
//! ## Phases
//!
//! 1. **Classification** (`classify`): ordered, mutually exclusive predicates
//!    pick one `BlockKind` per block; the first match wins
//! 2. **Compilation** (`compile`): the kind decides how the block's lines are
//!    stripped and joined before inline tokenizing
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `BlockKind`
//! - **`kinds`**: block syntax owners (`CodeFence`, `Heading`, `BlockQuote`, lists, `Paragraph`)
//! - **`classify`**: `classify()` priority chain
//! - **`compile`**: `compile_block()` dispatch
//!
//! ## Key Invariants
//!
//! - A fence-wrapped block is code even when its lines look like quotes
//! - Fenced code is a raw zone: no inline tokenizing inside
//! - Nesting is fixed at document → block → inline; blocks never contain blocks

pub mod classify;
pub mod compile;
pub mod kinds;
pub mod types;

pub use classify::classify;
pub use compile::{compile_block, compile_block_with};
pub use types::{Block, BlockKind};
