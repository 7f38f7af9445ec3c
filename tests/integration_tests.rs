mod common;

use common::{default_test_args, write_dataset};
use dbgrush::{run_assembler, AssemblyError, AssemblySummary};
use std::fs;
use tempfile::tempdir;

#[test]
fn run_assembler_writes_contig_fasta() {
    let dir = tempdir().unwrap();
    write_dataset(dir.path(), &["AAAACCCC"], &[], &[]);
    let args = default_test_args(dir.path(), 4);

    let contigs = run_assembler(&args).unwrap();
    assert_eq!(contigs, vec!["AAAACCCC", "GGGGTTTT"]);

    let content = fs::read_to_string(dir.path().join("contig.fasta")).unwrap();
    assert_eq!(content, ">contig_0\nAAAACCCC\n>contig_1\nGGGGTTTT\n");
}

#[test]
fn run_assembler_merges_overlapping_reads() {
    let dir = tempdir().unwrap();
    let genome = "CCGTAATGCCTTTCCCTAACAGAGTTTT";
    // Overlapping fragments spread over the three files
    write_dataset(
        dir.path(),
        &[&genome[0..12], &genome[8..20]],
        &[&genome[15..28]],
        &[&genome[4..24]],
    );
    let args = default_test_args(dir.path(), 5);

    let contigs = run_assembler(&args).unwrap();
    // Forward strand first, then its reverse complement; nothing left over
    assert_eq!(contigs.len(), 2);
    assert_eq!(contigs[0], genome);
    assert_eq!(contigs[1], dbgrush::reverse_complement(genome));
}

#[test]
fn run_assembler_custom_output_and_summary() {
    let dir = tempdir().unwrap();
    write_dataset(dir.path(), &["AAAACCCC"], &["AAAACCC"], &["GGGGTTTT"]);
    let out = dir.path().join("out.fasta");
    let summary_path = dir.path().join("summary.json");
    let mut args = default_test_args(dir.path(), 4);
    args.output = Some(out.clone());
    args.summary = Some(summary_path.clone());
    args.max_contigs = 5;

    let contigs = run_assembler(&args).unwrap();
    assert!(out.exists());
    assert!(!dir.path().join("contig.fasta").exists());

    let summary: AssemblySummary =
        serde_json::from_str(&fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(summary.contigs.len(), contigs.len());
    assert_eq!(summary.config.k, 4);
    assert_eq!(summary.config.max_contigs, 5);
    assert_eq!(summary.initial_nodes, 10);
    assert_eq!(summary.longest, 8);
}

#[test]
fn run_assembler_rejects_short_reads() {
    let dir = tempdir().unwrap();
    write_dataset(dir.path(), &["ACGT"], &["ACG"], &["A"]);
    let args = default_test_args(dir.path(), 25);

    let err = run_assembler(&args).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AssemblyError>(),
        Some(AssemblyError::Configuration { .. })
    ));
    assert!(!dir.path().join("contig.fasta").exists());
}

#[test]
fn run_assembler_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("short_1.fasta"), ">r\nACGTACGT\n").unwrap();
    let args = default_test_args(dir.path(), 4);

    let err = run_assembler(&args).unwrap_err();
    match err.downcast_ref::<AssemblyError>() {
        Some(AssemblyError::Io { path, .. }) => assert!(path.ends_with("short_2.fasta")),
        other => panic!("unexpected error: {:?}", other),
    }
}
