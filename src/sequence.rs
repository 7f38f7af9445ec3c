/// Complement a single base. Anything outside ACGT is returned as-is.
#[inline]
pub fn complement(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'C' => 'G',
        'G' => 'C',
        _ => base,
    }
}

/// Reverse complement of a nucleotide string (the opposite strand read 5' to 3')
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement).collect()
}
