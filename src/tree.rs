use crate::bits::parse_bits;
use crate::{CodeBook, CodeError, Node, Symbol};
use biterator::Bit;

/// A binary trie mapping codes to symbols, used for decoding.
#[derive(Debug, PartialEq)]
pub struct CodeTree<S: Symbol> {
    root: Node<S>,
}

/// How a decode treats bits left over after the last complete code.
#[derive(Clone, Copy)]
enum Trailing {
    Discard,
    Reject,
}

impl<S: Symbol> Default for CodeTree<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> CodeTree<S> {
    /// A tree with an empty root. It is not valid until codes are inserted.
    pub fn new() -> Self {
        Self::with_root(Node::new())
    }

    pub fn with_root(root: Node<S>) -> Self {
        CodeTree { root }
    }

    /// Build a tree holding every entry of `codebook`.
    ///
    /// Overlapping codes are inserted anyway and leave the tree invalid; check
    /// with [`CodeTree::is_valid`].
    pub fn from_codebook(codebook: &CodeBook<S>) -> Result<Self, CodeError> {
        log::debug!("Building code tree from {} codebook entries", codebook.len());

        let mut tree = Self::new();
        for (symbol, code) in codebook.all_sequences() {
            tree.put(code, *symbol)?;
        }

        if !tree.is_valid() {
            log::warn!("Codebook does not form a full prefix-free code tree");
        }
        Ok(tree)
    }

    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    pub fn is_valid(&self) -> bool {
        self.root.is_valid_tree()
    }

    /// Store `symbol` at the position reached by following `code` from the
    /// root, creating nodes along the way and replacing any symbol already
    /// there.
    ///
    /// Nodes created before an invalid character is reached are kept.
    pub fn put(&mut self, code: &str, symbol: S) -> Result<(), CodeError> {
        log::trace!("Inserting {symbol:?} at {code}");
        self.insert(parse_bits(code), symbol)
    }

    /// Like [`CodeTree::put`], but following a sequence of bits.
    pub fn put_bits<I>(&mut self, code: I, symbol: S)
    where
        I: IntoIterator<Item = Bit>,
    {
        let bits = code.into_iter().map(Ok);
        // Plain bits cannot be invalid.
        let _ = self.insert(bits, symbol);
    }

    fn insert<I>(&mut self, code: I, symbol: S) -> Result<(), CodeError>
    where
        I: Iterator<Item = Result<Bit, CodeError>>,
    {
        let mut current = &mut self.root;
        for bit in code {
            current = current.child_or_insert(&bit?);
        }
        current.set_symbol(symbol);
        Ok(())
    }

    /// Decode a textual bit sequence into the symbols it encodes.
    ///
    /// Bits after the last complete code are discarded without error, so a
    /// truncated input silently loses its final symbol. Use
    /// [`CodeTree::decode_exact`] when the input must end on a code boundary.
    pub fn decode(&self, bits: &str) -> Result<Vec<S>, CodeError> {
        self.walk(parse_bits(bits), Trailing::Discard)
    }

    /// Like [`CodeTree::decode`], but failing with
    /// [`CodeError::TrailingBits`] if the input ends partway through a code.
    pub fn decode_exact(&self, bits: &str) -> Result<Vec<S>, CodeError> {
        self.walk(parse_bits(bits), Trailing::Reject)
    }

    /// Like [`CodeTree::decode`], but reading a sequence of bits.
    pub fn decode_bits<I>(&self, bits: I) -> Result<Vec<S>, CodeError>
    where
        I: IntoIterator<Item = Bit>,
    {
        self.walk(bits.into_iter().map(Ok), Trailing::Discard)
    }

    fn walk<I>(&self, bits: I, trailing: Trailing) -> Result<Vec<S>, CodeError>
    where
        I: Iterator<Item = Result<Bit, CodeError>>,
    {
        let mut decoded = Vec::new();
        let mut current = &self.root;
        // Bits consumed since the cursor was last at the root.
        let mut pending = 0;

        for (index, bit) in bits.enumerate() {
            current = current
                .child(&bit?)
                .ok_or(CodeError::Undecodable { index })?;
            pending += 1;

            if current.is_leaf() {
                let symbol = current.symbol().ok_or(CodeError::Undecodable { index })?;
                decoded.push(*symbol);
                current = &self.root;
                pending = 0;
            }
        }

        if pending > 0 {
            match trailing {
                Trailing::Discard => {
                    log::debug!("Discarding {pending} trailing bits that do not complete a code")
                }
                Trailing::Reject => return Err(CodeError::TrailingBits { count: pending }),
            }
        }
        Ok(decoded)
    }

    /// The codebook this tree decodes: every symbol in the tree paired with
    /// the path that reaches it.
    pub fn to_codebook(&self) -> CodeBook<S> {
        self.root
            .paths()
            .into_iter()
            .map(|(code, symbol)| (symbol, code))
            .collect()
    }
}
