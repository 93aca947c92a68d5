use crate::CodeBook;

/// A fixed-length code for the symbols 'a' to 'd':
///   a: 00
///   b: 01
///   c: 10
///   d: 11
pub fn sample_codebook() -> CodeBook<char> {
    let mut codebook = CodeBook::new();
    codebook.add_sequence('a', "00");
    codebook.add_sequence('b', "01");
    codebook.add_sequence('c', "10");
    codebook.add_sequence('d', "11");
    codebook
}
