use crate::Symbol;
use crate::bits::bit_char;
use biterator::Bit;

/// A node of a binary code tree.
///
/// A well-formed node is either a leaf, holding a symbol and no children, or
/// an internal node, holding both children and no symbol. Nodes are built
/// lazily by insertion, so a node may transiently (or, after overlapping
/// insertions, permanently) violate this; see [`Node::is_valid_node`].
#[derive(Debug, PartialEq)]
pub struct Node<S: Symbol> {
    zero: Option<Box<Node<S>>>,
    one: Option<Box<Node<S>>>,
    symbol: Option<S>,
}

impl<S: Symbol> Default for Node<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> Node<S> {
    /// An empty node, with no children and no symbol.
    pub fn new() -> Self {
        Node {
            zero: None,
            one: None,
            symbol: None,
        }
    }

    pub fn leaf(symbol: S) -> Self {
        Node {
            zero: None,
            one: None,
            symbol: Some(symbol),
        }
    }

    pub fn internal(zero: Node<S>, one: Node<S>) -> Self {
        Node {
            zero: Some(Box::new(zero)),
            one: Some(Box::new(one)),
            symbol: None,
        }
    }

    pub fn symbol(&self) -> Option<&S> {
        self.symbol.as_ref()
    }

    pub(crate) fn set_symbol(&mut self, symbol: S) -> Option<S> {
        self.symbol.replace(symbol)
    }

    /// The child reached by following `bit`, if it exists.
    pub fn child(&self, bit: &Bit) -> Option<&Node<S>> {
        match bit {
            Bit::Zero => self.zero.as_deref(),
            Bit::One => self.one.as_deref(),
        }
    }

    /// The child reached by following `bit`, creating an empty one if absent.
    pub(crate) fn child_or_insert(&mut self, bit: &Bit) -> &mut Node<S> {
        let slot = match bit {
            Bit::Zero => &mut self.zero,
            Bit::One => &mut self.one,
        };
        slot.get_or_insert_with(Box::default)
    }

    pub fn is_leaf(&self) -> bool {
        self.zero.is_none() && self.one.is_none()
    }

    pub fn is_valid_node(&self) -> bool {
        match self.symbol {
            Some(_) => self.is_leaf(),
            None => self.zero.is_some() && self.one.is_some(),
        }
    }

    /// Whether this node and every node below it is valid.
    pub fn is_valid_tree(&self) -> bool {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            if !node.is_valid_node() {
                return false;
            }
            pending.extend(node.zero.as_deref());
            pending.extend(node.one.as_deref());
        }
        true
    }

    /// Every symbol-carrying node at or below this one, paired with the
    /// textual path of bits leading to it from here.
    pub(crate) fn paths(&self) -> Vec<(String, S)> {
        let mut found = Vec::new();
        let mut pending = vec![(self, String::new())];
        while let Some((node, path)) = pending.pop() {
            if let Some(symbol) = node.symbol {
                found.push((path.clone(), symbol));
            }
            if let Some(one) = node.one.as_deref() {
                pending.push((one, format!("{path}{}", bit_char(&Bit::One))));
            }
            if let Some(zero) = node.zero.as_deref() {
                pending.push((zero, format!("{path}{}", bit_char(&Bit::Zero))));
            }
        }
        found
    }
}

// The default drop glue recurses once per level, which long codes can turn
// into a stack overflow. Unlink the subtree onto a heap stack instead.
impl<S: Symbol> Drop for Node<S> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<S>>> = Vec::new();
        pending.extend(self.zero.take());
        pending.extend(self.one.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.zero.take());
            pending.extend(node.one.take());
        }
    }
}
