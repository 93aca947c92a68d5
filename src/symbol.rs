use std::fmt::Debug;
use std::hash::Hash;

/// A unit of text that a codebook assigns a code to, and that a code tree
/// stores at its leaves.
pub trait Symbol: Eq + Hash + Copy + Debug {}

impl Symbol for char {}

impl Symbol for u8 {}
