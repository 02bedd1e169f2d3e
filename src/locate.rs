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

use crate::KmerOrigin;
use crate::SeqRecord;

/// Find the first occurrence of each distinct k-mer in each record.
///
/// Scans every record left to right for every k-mer in `distinct` and
/// reports the lowest matching offset. Records that do not contain a k-mer
/// produce nothing for that pairing.
///
/// Output order is one group per distinct k-mer, in the order given by
/// `distinct`, with the group's origins in batch order. The search runs in
/// parallel over the distinct k-mers but the groups are reassembled into
/// this order.
///
/// The scan is `O(distinct × total sequence length)`. Fine for read sets
/// and genome excerpts; swap in a substring index behind the same types if
/// whole chromosomes become an input.
///
pub fn origins(distinct: &[&str], records: &[SeqRecord]) -> Vec<KmerOrigin> {
    let per_kmer: Vec<Vec<KmerOrigin>> = distinct.par_iter().map(|kmer| {
        let kmer: &str = *kmer;
        records.iter().enumerate().filter_map(|(record_idx, record)| {
            record.seq.find(kmer).map(|start| KmerOrigin {
                kmer: kmer.to_string(),
                record_idx,
                start,
                end: start + kmer.len(),
            })
        }).collect()
    }).collect();

    per_kmer.into_iter().flatten().collect()
}
