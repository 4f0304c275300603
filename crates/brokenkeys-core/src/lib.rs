//! # brokenkeys-core
//!
//! Safe Rust implementation of broken-keyboard word typeability.
//!
//! Given a text and the set of characters whose keys no longer work, this
//! crate counts how many whitespace-separated words of the text can still be
//! typed in full. The crate is pure and performs no I/O; every pair of input
//! strings has a well-defined count.

#![deny(unsafe_code)]

pub mod keyset;
pub mod typeable;
pub mod words;

pub use keyset::BrokenKeys;
pub use typeable::{blocking_key, count_typeable, is_typeable};
pub use words::{Words, words};
