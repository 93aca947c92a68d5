//! Binary prefix codes backed by an explicit codebook.
//!
//! A [`CodeBook`] maps each symbol to a code written as a string of '0' and
//! '1', and encodes text by concatenating codes. A [`CodeTree`] built from the
//! codebook is a binary trie whose leaves hold the symbols, and decodes a bit
//! sequence by walking from the root and restarting at every leaf.

pub mod bits;
pub mod codebook;
pub mod error;
pub mod example;
pub mod node;
pub mod symbol;
pub mod tree;

pub use codebook::CodeBook;
pub use error::CodeError;
pub use node::Node;
pub use symbol::Symbol;
pub use tree::CodeTree;
