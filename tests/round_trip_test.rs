use prefix_code::{CodeBook, CodeError, CodeTree};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::Rng;

/// A codebook whose codes are the leaves of a full binary tree, so they are
/// prefix-free and every internal position has both children.
#[derive(Debug, Clone)]
struct FullCodeBook {
    symbols: Vec<char>,
    codebook: CodeBook<char>,
}

impl FullCodeBook {
    /// Build codes for `size` symbols by starting from a single empty code and
    /// repeatedly splitting the code at one of the `splits` positions into its
    /// two extensions.
    fn new(size: usize, splits: &[usize]) -> Self {
        assert!(size >= 2, "A full code tree needs at least two symbols");

        let mut codes = vec![String::new()];
        for i in 0..size - 1 {
            let chosen = splits.get(i).copied().unwrap_or(0) % codes.len();
            let prefix = codes.swap_remove(chosen);
            codes.push(format!("{prefix}0"));
            codes.push(format!("{prefix}1"));
        }

        let symbols: Vec<char> = (0..size as u32)
            .map(|i| char::from_u32('A' as u32 + i).expect("Symbols are ASCII letters and up"))
            .collect();
        let codebook = symbols.iter().copied().zip(codes).collect();
        Self { symbols, codebook }
    }

    /// Generate a random text of the indicated length from the codebook's
    /// symbols.
    fn random_text(&self, length: usize) -> String {
        (0..length)
            .map(|_| self.symbols[rand::rng().random_range(0..self.symbols.len())])
            .collect()
    }
}

impl Arbitrary for FullCodeBook {
    fn arbitrary(g: &mut Gen) -> Self {
        let size = 2 + usize::arbitrary(g) % 40;
        let splits = Vec::arbitrary(g);
        FullCodeBook::new(size, &splits)
    }
}

/// Property test verifying that decoding an encoded text results in the same
/// text.
#[quickcheck]
fn encode_and_decode_cancel(codes: FullCodeBook, length: u8) -> bool {
    let text = codes.random_text(length as usize);
    let tree = CodeTree::from_codebook(&codes.codebook).expect("Generated codes are binary");

    let encoded = codes.codebook.encode(text.chars()).expect("Encoding failed");
    let decoded: Result<String, CodeError> = tree
        .decode_exact(&encoded)
        .map(|symbols| symbols.into_iter().collect());

    decoded == Ok(text)
}

#[quickcheck]
fn bit_level_encode_and_decode_cancel(codes: FullCodeBook, length: u8) -> bool {
    let text = codes.random_text(length as usize);
    let tree = CodeTree::from_codebook(&codes.codebook).expect("Generated codes are binary");

    let bits = codes.codebook.encode_bits(text.chars()).expect("Encoding failed");
    let decoded: Result<String, CodeError> = tree
        .decode_bits(bits)
        .map(|symbols| symbols.into_iter().collect());

    decoded == Ok(text)
}

#[quickcheck]
fn full_codebook_builds_valid_tree(codes: FullCodeBook) -> bool {
    CodeTree::from_codebook(&codes.codebook)
        .map(|tree| tree.is_valid())
        .unwrap_or(false)
}

#[quickcheck]
fn tree_recovers_its_codebook(codes: FullCodeBook) -> bool {
    CodeTree::from_codebook(&codes.codebook)
        .map(|tree| tree.to_codebook() == codes.codebook)
        .unwrap_or(false)
}

/// Extending any code with one more bit makes the tree invalid, since the
/// old leaf now has a child.
#[quickcheck]
fn extending_a_code_invalidates_tree(codes: FullCodeBook, which: usize) -> bool {
    let symbol = codes.symbols[which % codes.symbols.len()];
    let mut codebook = codes.codebook.clone();
    let code = codebook
        .get_sequence(&symbol)
        .expect("Symbol has a code")
        .to_string();
    codebook.add_sequence('!', format!("{code}0"));

    CodeTree::from_codebook(&codebook)
        .map(|tree| !tree.is_valid())
        .unwrap_or(false)
}

#[quickcheck]
fn missing_symbol_produces_no_output(codes: FullCodeBook, length: u8) -> bool {
    let mut text = codes.random_text(length as usize);
    text.push('!');

    codes.codebook.encode(text.chars())
        == Err(CodeError::MissingSymbol {
            index: length as usize,
            symbol: "'!'".to_string(),
        })
}

#[test]
fn dropped_trailing_bits_lose_final_symbol() {
    let codes = FullCodeBook::new(4, &[]);
    let tree = CodeTree::from_codebook(&codes.codebook).expect("Generated codes are binary");
    let encoded = codes.codebook.encode("AB".chars()).expect("Encoding failed");

    let truncated = &encoded[..encoded.len() - 1];
    let decoded: String = tree
        .decode(truncated)
        .expect("Lenient decode ignores partial codes")
        .into_iter()
        .collect();
    assert_eq!(decoded, "A");
    assert!(matches!(
        tree.decode_exact(truncated),
        Err(CodeError::TrailingBits { .. })
    ));
}
