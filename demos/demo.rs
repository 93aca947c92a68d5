use prefix_code::CodeTree;
use prefix_code::example::sample_codebook;

fn main() -> Result<(), prefix_code::CodeError> {
    let codebook = sample_codebook();

    let text = "abac";
    let encoded = codebook.encode(text.chars())?;
    println!("Encoded: {encoded}");

    let tree = CodeTree::from_codebook(&codebook)?;
    let decoded: String = tree.decode(&encoded)?.into_iter().collect();
    println!("Decoded: {decoded}");

    Ok(())
}
