//! Markdown helpers used by the calendar views.
//!
//! # Responsibility
//! - Split note text into heading-delimited content blocks.
//!
//! # Invariants
//! - Extraction is pure and never fails; malformed input yields fewer blocks.

pub mod blocks;

pub use blocks::{clamp_lines, extract_blocks, find_block_by_heading, ContentBlock};
