// alku: Find the sequence of origin for k-mers in sequencing reads and assemblies.
//
// Copyright 2025 Tommi Mäklin [tommi@maklin.fi].
//
// Copyrights in this project are retained by contributors. No copyright assignment
// is required to contribute to this project.
//
// Except as otherwise noted (below and/or in individual files), this
// project is licensed under the Apache License, Version 2.0
// <LICENSE-APACHE> or <http://www.apache.org/licenses/LICENSE-2.0> or
// the MIT license, <LICENSE-MIT> or <http://opensource.org/licenses/MIT>,
// at your option.
//

//! alku is a library and a command-line client for:
//!
//!   - Extracting the sliding-window k-mers from a batch of sequence records.
//!   - Listing the distinct k-mers in the batch in first-appearance order.
//!   - Reporting where each distinct k-mer first occurs within each record.
//!
//! The following input styles are supported:
//!   - PacBio long reads (`@`-marked identifier lines).
//!   - Illumina short reads (`@`-marked identifier lines).
//!   - Assembled genomes (`>`-marked identifier lines).
//!
//! The three styles differ only in their identifier marker character; the
//! analysis itself is shared.
//!
//! ## Usage
//!
//! ### Command line
//!
//! The alku CLI supports the following subcommands:
//!   - `alku pacbio` find k-mer origins in PacBio long reads.
//!   - `alku illumina` find k-mer origins in Illumina short reads.
//!   - `alku genome` find k-mer origins in an assembled genome.
//!
//! Each run writes two files: a listing of the distinct k-mers in the input,
//! one per line in the order they first appear, and a tab-separated origin
//! table with one row per (k-mer, record) pair the k-mer was found in.
//!
//! ### Rust API
//!
//! The API provides functions for processing entire inputs through structs
//! that implement [Read] and/or [Write]:
//!
//!   - [find_origins]: run the extraction, deduplication, and origin lookup
//!     stages over an already-loaded batch.
//!   - [find_origins_from_read]: load records from a [Read] and run the
//!     pipeline.
//!   - [find_origins_from_read_to_write]: load records from a [Read], run the
//!     pipeline, and write both output artifacts.
//!
//! The individual stages are available in [extract], [dedup], and [locate],
//! and the record loader in [parser].
//!
//! See documentation for the appropriate functions for usage examples.
//!

use std::io::Read;
use std::io::Write;

pub mod dedup;
pub mod extract;
pub mod locate;
pub mod parser;
pub mod printer;

type E = Box<dyn std::error::Error>;

#[derive(Debug, Clone)]
pub struct InvalidKmerLength;

impl std::fmt::Display for InvalidKmerLength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "k-mer length must be greater than 0")
    }
}

impl std::error::Error for InvalidKmerLength {}

/// Supported input record styles.
///
/// Carries the identifier marker character and the default output file
/// prefix; everything else about the run is shared between the styles.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Technology {
    #[default]
    Pacbio,
    Illumina,
    Genome,
}

impl Technology {
    /// Character marking a record identifier line in this style.
    pub fn marker(&self) -> char {
        match self {
            Technology::Pacbio => '@',
            Technology::Illumina => '@',
            Technology::Genome => '>',
        }
    }

    /// Default prefix for the output file names.
    pub fn output_prefix(&self) -> &str {
        match self {
            Technology::Pacbio => "pacbio",
            Technology::Illumina => "illumina",
            Technology::Genome => "genome",
        }
    }
}

/// One sequence record from an input source.
///
/// `id` is the record identifier with the marker character stripped. Records
/// parsed from content that precedes any identifier line have an empty `id`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SeqRecord {
    /// Record identifier, may be empty.
    pub id: String,
    /// Sequence text over the alphabet {A,T,G,C}.
    pub seq: String,
}

/// First occurrence of a distinct k-mer within one record.
///
/// Invariants: `end == start + kmer.len()` and the record's sequence text
/// equals `kmer` over `start..end`. An origin is only ever produced for
/// records that contain the k-mer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct KmerOrigin {
    /// The distinct k-mer this origin belongs to.
    pub kmer: String,
    /// Index of the record in the input batch.
    pub record_idx: usize,
    /// 0-based offset of the first character of the match.
    pub start: usize,
    /// One past the last character of the match.
    pub end: usize,
}

/// Find the origins of all distinct k-mers in a batch of records.
///
/// Runs the three pipeline stages in order: sliding-window extraction over
/// every record, global deduplication of the pooled k-mer stream, and origin
/// lookup for each distinct k-mer in each record.
///
/// Returns the distinct k-mers in the order they first appear in the batch,
/// and one [KmerOrigin] per (distinct k-mer, record) pair the k-mer occurs
/// in. Origins are ordered by distinct k-mer first, then by record index.
///
/// ## Errors
///
/// Returns [InvalidKmerLength] if `k` is 0.
///
/// ## Usage
/// ```rust
/// use alku::{find_origins, KmerOrigin, SeqRecord};
///
/// let records = vec![
///     SeqRecord{ id: "read1".to_string(), seq: "ATCGATCG".to_string() },
/// ];
///
/// let (distinct, origins) = find_origins(&records, 4).unwrap();
///
/// // "ATCG" repeats at offset 4 but is only listed and located once
/// assert_eq!(distinct, vec!["ATCG", "TCGA", "CGAT", "GATC"]);
/// assert_eq!(origins[0], KmerOrigin{ kmer: "ATCG".to_string(), record_idx: 0, start: 0, end: 4 });
/// ```
pub fn find_origins(
    records: &[SeqRecord],
    k: usize,
) -> Result<(Vec<String>, Vec<KmerOrigin>), E> {
    let pooled = extract::batch(records, k)?;
    let distinct = dedup::first_occurrences(&pooled);
    let origins = locate::origins(&distinct, records);

    let distinct_owned: Vec<String> = distinct.iter().map(|kmer| kmer.to_string()).collect();
    Ok((distinct_owned, origins))
}

/// Load records from [Read](std::io::Read) and find the k-mer origins.
///
/// Record identifier lines are recognized by `marker` (`@` for read formats,
/// `>` for assembled genomes). See [parser::read_records] for the line
/// classification rules.
///
/// ## Usage
/// ```rust
/// use alku::find_origins_from_read;
/// use std::io::Cursor;
///
/// // A fastq-style record; the separator and quality lines are ignored
/// let data = b"@read1 length=8\nATCGATCG\n+\nIIIIIIII\n".to_vec();
/// let mut input: Cursor<Vec<u8>> = Cursor::new(data);
///
/// let (distinct, origins) = find_origins_from_read(&mut input, '@', 4).unwrap();
///
/// assert_eq!(distinct, vec!["ATCG", "TCGA", "CGAT", "GATC"]);
/// assert_eq!(origins.len(), 4);
/// ```
pub fn find_origins_from_read<R: Read>(
    conn_in: &mut R,
    marker: char,
    k: usize,
) -> Result<(Vec<String>, Vec<KmerOrigin>), E> {
    let records = parser::read_records(conn_in, marker)?;
    find_origins(&records, k)
}

/// Load records from [Read](std::io::Read), find the k-mer origins, and
/// write both output artifacts.
///
/// Writes the distinct k-mer listing to `kmers_out` (one k-mer per line, in
/// first-appearance order) and the origin table to `origins_out`
/// (tab-separated `start`, `end`, k-mer, record identifier).
///
/// ## Usage
/// ```rust
/// use alku::find_origins_from_read_to_write;
/// use std::io::Cursor;
///
/// let data = b">chr1\nAAAA\n>chr2\nAAAT\n".to_vec();
/// let mut input: Cursor<Vec<u8>> = Cursor::new(data);
///
/// let mut kmers_out: Vec<u8> = Vec::new();
/// let mut origins_out: Vec<u8> = Vec::new();
/// find_origins_from_read_to_write(&mut input, '>', 2, &mut kmers_out, &mut origins_out).unwrap();
///
/// assert_eq!(kmers_out, b"AA\nAT\n".to_vec());
///
/// // "AT" does not occur in chr1 so no row refers to that pairing
/// let mut expected: Vec<u8> = Vec::new();
/// expected.append(&mut b"0\t2\tAA\tchr1\n".to_vec());
/// expected.append(&mut b"0\t2\tAA\tchr2\n".to_vec());
/// expected.append(&mut b"2\t4\tAT\tchr2\n".to_vec());
///
/// assert_eq!(origins_out, expected);
/// ```
pub fn find_origins_from_read_to_write<R: Read, W1: Write, W2: Write>(
    conn_in: &mut R,
    marker: char,
    k: usize,
    kmers_out: &mut W1,
    origins_out: &mut W2,
) -> Result<(), E> {
    let records = parser::read_records(conn_in, marker)?;
    let (distinct, origins) = find_origins(&records, k)?;

    printer::write_distinct_kmers(&distinct, kmers_out)?;
    printer::write_origins(&origins, &records, origins_out)?;

    Ok(())
}
