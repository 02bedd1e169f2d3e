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
use indexmap::IndexSet;

/// Deduplicate the pooled k-mer stream, keeping first appearances.
///
/// Each distinct k-mer is retained at the position of its first appearance
/// in the stream; all later repeats are dropped. Membership is tested
/// against everything seen so far, not only the previous element, so
/// repeats separated by other k-mers are also removed.
///
/// Idempotent: an already-distinct input is returned unchanged.
///
pub fn first_occurrences<'a>(stream: &[&'a str]) -> Vec<&'a str> {
    let mut seen: IndexSet<&str> = IndexSet::with_capacity(stream.len());
    for kmer in stream {
        seen.insert(*kmer);
    }
    seen.into_iter().collect()
}
