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
use rayon::prelude::*;

use crate::InvalidKmerLength;
use crate::SeqRecord;

type E = Box<dyn std::error::Error>;

// Window offsets for a sequence of length `len`; empty when `k > len`.
fn n_windows(len: usize, k: usize) -> usize {
    (len + 1).saturating_sub(k)
}

/// Extract the sliding-window k-mers from one sequence.
///
/// Returns the substrings `seq[i..i + k]` for every window offset `i` in
/// increasing order. A sequence shorter than `k` produces no k-mers.
///
/// ## Errors
///
/// Returns [InvalidKmerLength] if `k` is 0.
///
pub fn kmers(seq: &str, k: usize) -> Result<Vec<&str>, E> {
    if k == 0 {
        return Err(Box::new(InvalidKmerLength));
    }
    Ok(windows(seq, k))
}

// Assumes `k > 0`, checked by the callers.
fn windows(seq: &str, k: usize) -> Vec<&str> {
    (0..n_windows(seq.len(), k)).map(|i| &seq[i..i + k]).collect()
}

/// Extract the pooled k-mer stream from a batch of records.
///
/// Records are processed in parallel; the output is ordered by record in
/// batch order and within each record in window order, so the result is
/// identical to extracting from each record in sequence.
///
/// ## Errors
///
/// Returns [InvalidKmerLength] if `k` is 0.
///
pub fn batch<'a>(records: &'a [SeqRecord], k: usize) -> Result<Vec<&'a str>, E> {
    if k == 0 {
        return Err(Box::new(InvalidKmerLength));
    }

    let per_record: Vec<Vec<&str>> = records.par_iter().map(|record| {
        windows(&record.seq, k)
    }).collect();

    Ok(per_record.into_iter().flatten().collect())
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn kmers_in_window_order() {
        use super::kmers;

        let got = kmers("ATCGATCG", 4).unwrap();
        let expected = vec!["ATCG", "TCGA", "CGAT", "GATC", "ATCG"];

        assert_eq!(got, expected);
    }

    #[test]
    fn kmers_count_and_length() {
        use super::kmers;

        let seq = "ATCGATTGCA";
        for k in 1..=seq.len() {
            let got = kmers(seq, k).unwrap();
            assert_eq!(got.len(), seq.len() - k + 1);
            assert!(got.iter().all(|kmer| kmer.len() == k));
        }
    }

    #[test]
    fn kmers_short_sequence_is_empty() {
        use super::kmers;

        let got = kmers("ATC", 10).unwrap();

        assert!(got.is_empty());
    }

    #[test]
    fn kmers_window_equal_to_length() {
        use super::kmers;

        let got = kmers("ATCG", 4).unwrap();

        assert_eq!(got, vec!["ATCG"]);
    }

    #[test]
    fn kmers_rejects_zero_k() {
        use super::kmers;

        assert!(kmers("ATCG", 0).is_err());
    }

    #[test]
    fn batch_pools_in_record_order() {
        use super::batch;
        use crate::SeqRecord;

        let records = vec![
            SeqRecord{ id: "r1".to_string(), seq: "AAAA".to_string() },
            SeqRecord{ id: "r2".to_string(), seq: "AAAT".to_string() },
        ];

        let got = batch(&records, 2).unwrap();
        let expected = vec!["AA", "AA", "AA", "AA", "AA", "AT"];

        assert_eq!(got, expected);
    }

    #[test]
    fn batch_empty_input() {
        use super::batch;
        use crate::SeqRecord;

        let records: Vec<SeqRecord> = Vec::new();
        let got = batch(&records, 2).unwrap();

        assert!(got.is_empty());
    }
}
