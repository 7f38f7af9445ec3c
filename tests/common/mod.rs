use dbgrush::Args;
use std::fs;
use std::path::Path;

/// Args for a dataset directory with everything else at the defaults
pub fn default_test_args(dataset: &Path, kmer_size: usize) -> Args {
    Args {
        dataset: dataset.to_path_buf(),
        output: None,
        kmer_size,
        max_contigs: 20,
        summary: None,
        verbose: false,
    }
}

/// Write the three read files of a dataset, each read under its own header
pub fn write_dataset(dir: &Path, short1: &[&str], short2: &[&str], long: &[&str]) {
    for (name, reads) in [
        ("short_1.fasta", short1),
        ("short_2.fasta", short2),
        ("long.fasta", long),
    ] {
        let mut text = String::new();
        for (i, read) in reads.iter().enumerate() {
            text.push_str(&format!(">{}_{}\n{}\n", name, i, read));
        }
        fs::write(dir.join(name), text).unwrap();
    }
}
