use crate::bits::parse_bits;
use crate::{CodeError, Symbol};
use biterator::Bit;
use std::collections::HashMap;

/// A mapping from symbols to their codes, each code a string of '0' and '1'.
///
/// The codebook does not check its codes. For encoding followed by decoding
/// to give back the original text, no code may be a prefix of another.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBook<S: Symbol> {
    codes: HashMap<S, String>,
}

impl<S: Symbol> Default for CodeBook<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> CodeBook<S> {
    pub fn new() -> Self {
        CodeBook {
            codes: HashMap::new(),
        }
    }

    /// Assign `code` to `symbol`, replacing any code it already had.
    pub fn add_sequence(&mut self, symbol: S, code: impl Into<String>) {
        self.codes.insert(symbol, code.into());
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.codes.contains_key(symbol)
    }

    /// Whether every symbol of `text` has a code.
    pub fn contains_all<I>(&self, text: I) -> bool
    where
        I: IntoIterator<Item = S>,
    {
        text.into_iter().all(|symbol| self.contains(&symbol))
    }

    pub fn get_sequence(&self, symbol: &S) -> Option<&str> {
        self.codes.get(symbol).map(String::as_str)
    }

    /// Encode a text as the concatenation of the codes of its symbols.
    ///
    /// Fails without producing any output if some symbol has no code.
    pub fn encode<I>(&self, text: I) -> Result<String, CodeError>
    where
        I: IntoIterator<Item = S>,
    {
        let codes = self.lookup_all(text)?;
        Ok(codes.concat())
    }

    /// Like [`CodeBook::encode`], but producing bits. Codes are only checked
    /// for non-binary characters here, since adding them is unchecked.
    pub fn encode_bits<I>(&self, text: I) -> Result<Vec<Bit>, CodeError>
    where
        I: IntoIterator<Item = S>,
    {
        let mut bits = Vec::new();
        for code in self.lookup_all(text)? {
            for bit in parse_bits(code) {
                bits.push(bit?);
            }
        }
        Ok(bits)
    }

    /// Every (symbol, code) entry, in no particular order.
    pub fn all_sequences(&self) -> impl Iterator<Item = (&S, &str)> {
        self.codes.iter().map(|(symbol, code)| (symbol, code.as_str()))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Look up the code of every symbol in `text`, failing on the first
    /// symbol that has none.
    fn lookup_all<I>(&self, text: I) -> Result<Vec<&str>, CodeError>
    where
        I: IntoIterator<Item = S>,
    {
        text.into_iter()
            .enumerate()
            .map(|(index, symbol)| {
                self.get_sequence(&symbol)
                    .ok_or_else(|| CodeError::MissingSymbol {
                        index,
                        symbol: format!("{symbol:?}"),
                    })
            })
            .collect()
    }
}

impl<S: Symbol, C: Into<String>> FromIterator<(S, C)> for CodeBook<S> {
    fn from_iter<T: IntoIterator<Item = (S, C)>>(iter: T) -> Self {
        let mut codebook = CodeBook::new();
        for (symbol, code) in iter {
            codebook.add_sequence(symbol, code);
        }
        codebook
    }
}
