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
use std::io::Write;

use crate::KmerOrigin;
use crate::SeqRecord;

type E = Box<dyn std::error::Error>;

/// Write the distinct k-mer listing to [Write](std::io::Write).
///
/// One k-mer per line, in the order given (first-appearance order when the
/// input comes from [dedup](crate::dedup)).
///
pub fn write_distinct_kmers<W: Write>(
    kmers: &[String],
    conn_out: &mut W,
) -> Result<(), E> {
    for kmer in kmers {
        conn_out.write_all(kmer.as_bytes())?;
        conn_out.write_all(b"\n")?;
    }
    conn_out.flush()?;
    Ok(())
}

/// Write the origin table to [Write](std::io::Write).
///
/// One line per origin with tab-separated fields `start`, `end`, k-mer, and
/// the identifier of the record the origin was found in.
///
pub fn write_origins<W: Write>(
    origins: &[KmerOrigin],
    records: &[SeqRecord],
    conn_out: &mut W,
) -> Result<(), E> {
    for origin in origins {
        let id = records.get(origin.record_idx).map(|record| record.id.as_str()).unwrap_or("");
        let line = format!("{}\t{}\t{}\t{}\n", origin.start, origin.end, origin.kmer, id);
        conn_out.write_all(line.as_bytes())?;
    }
    conn_out.flush()?;
    Ok(())
}
