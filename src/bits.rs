use crate::CodeError;
use biterator::Bit;

/// Convert a single character of a textual bit sequence into a bit.
pub fn parse_bit(index: usize, c: char) -> Result<Bit, CodeError> {
    match c {
        '0' => Ok(Bit::Zero),
        '1' => Ok(Bit::One),
        found => Err(CodeError::InvalidBitSequence { index, found }),
    }
}

/// Lazily parse a textual bit sequence. Parsing stops being meaningful at the
/// first error, so callers should stop consuming once one is yielded.
pub fn parse_bits(bits: &str) -> impl Iterator<Item = Result<Bit, CodeError>> + '_ {
    bits.chars().enumerate().map(|(index, c)| parse_bit(index, c))
}

/// The character used for `bit` in textual bit sequences.
pub fn bit_char(bit: &Bit) -> char {
    match bit {
        Bit::Zero => '0',
        Bit::One => '1',
    }
}
