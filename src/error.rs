/// Errors that can occur while building a code tree, encoding, or decoding.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CodeError {
    /// The text contains a symbol with no entry in the codebook.
    #[error("Codebook has no code for symbol {symbol} at position {index}")]
    MissingSymbol { index: usize, symbol: String },

    /// A bit sequence contains a character other than '0' or '1'.
    #[error("Invalid character {found:?} at position {index} of bit sequence")]
    InvalidBitSequence { index: usize, found: char },

    /// The bit at `index` leads off the tree, or onto a node with no symbol.
    #[error("Bit at position {index} does not follow any path to a symbol")]
    Undecodable { index: usize },

    /// The input ended partway through a code.
    #[error("Bit sequence ends with {count} bits that do not complete a code")]
    TrailingBits { count: usize },
}
