use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{AssemblyError, Result};

/// Read files of one dataset directory, in the order the groups are fed to the graph
pub const DATASET_FILES: [&str; 3] = ["short_1.fasta", "short_2.fasta", "long.fasta"];

/// Parse reads from FASTA-like text: header lines (`>`) and blank lines are
/// dropped, every other line is one read.
pub fn parse_reads<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut reads = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('>') {
            continue;
        }
        reads.push(line.to_string());
    }
    Ok(reads)
}

pub fn read_reads(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| AssemblyError::io(path, e))?;
    let reads = parse_reads(BufReader::new(file)).map_err(|e| AssemblyError::io(path, e))?;
    debug!(
        "{}: {} reads, first read {} bp",
        path.display(),
        reads.len(),
        reads.first().map_or(0, |r| r.chars().count())
    );
    Ok(reads)
}

/// Load the `short_1`, `short_2` and `long` read sets of a dataset directory.
pub fn load_dataset(dir: &Path) -> Result<Vec<Vec<String>>> {
    let groups = DATASET_FILES
        .iter()
        .map(|name| read_reads(&dir.join(name)))
        .collect::<Result<Vec<_>>>()?;
    info!(
        "Loaded {} reads from {}",
        groups.iter().map(Vec::len).sum::<usize>(),
        dir.display()
    );
    Ok(groups)
}

/// Write contigs as `>contig_<i>` records, one sequence line each.
pub fn write_contigs<W: Write>(mut writer: W, contigs: &[String]) -> io::Result<()> {
    for (i, contig) in contigs.iter().enumerate() {
        writeln!(writer, ">contig_{}", i)?;
        writeln!(writer, "{}", contig)?;
    }
    writer.flush()
}

pub fn write_contigs_to_path(path: &Path, contigs: &[String]) -> Result<()> {
    let file = File::create(path).map_err(|e| AssemblyError::io(path, e))?;
    write_contigs(BufWriter::new(file), contigs).map_err(|e| AssemblyError::io(path, e))?;
    info!("Wrote {} contigs to {}", contigs.len(), path.display());
    Ok(())
}
