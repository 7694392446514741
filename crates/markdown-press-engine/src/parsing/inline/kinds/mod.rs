//! # Inline Kinds
//!
//! Inline constructs that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Link`**: `[label](url)`, the bracket and paren markers
//! - **`Image`**: `BANG` prefix in front of the link shape
//! - **`Delimiter`**: symmetric style markers `**`, `_` and `` ` ``
//!
//! The parser calls these constants; it never hardcodes `[` or `**`.

pub mod delimiter;
pub mod image;
pub mod link;

pub use delimiter::Delimiter;
pub use image::Image;
pub use link::Link;
