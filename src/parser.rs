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
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;

use crate::SeqRecord;

type E = Box<dyn std::error::Error>;

/// Read sequence records from [Read](std::io::Read).
///
/// Lines are classified by their first character:
///
///   - `marker` opens a new record; the identifier is the rest of the line
///     up to the first space, with the marker stripped.
///   - One of `A`, `T`, `G`, `C` is sequence content and is appended to the
///     current record. Content seen before any marker line opens a record
///     with an empty identifier.
///   - Anything else (fastq separator and quality lines, blank lines) is
///     ignored.
///
/// Note the single-character membership test on sequence lines: lines
/// starting with `C` must classify the same as the other three letters.
///
pub fn read_records<R: Read>(
    conn: &mut R,
    marker: char,
) -> Result<Vec<SeqRecord>, E> {
    let mut records: Vec<SeqRecord> = Vec::new();

    let mut reader = BufReader::new(conn);
    let mut line = String::new();
    loop {
        line.clear();
        let n_read = reader.read_line(&mut line)?;
        if n_read == 0 {
            break;
        }
        let contents = line.trim_end_matches(['\n', '\r']);

        match contents.chars().next() {
            Some(first) if first == marker => {
                let id = contents[marker.len_utf8()..].split(' ').next().unwrap_or("").to_string();
                records.push(SeqRecord{ id, seq: String::new() });
            },
            Some('A' | 'T' | 'G' | 'C') => {
                if records.is_empty() {
                    records.push(SeqRecord::default());
                }
                if let Some(current) = records.last_mut() {
                    current.seq.push_str(contents);
                }
            },
            _ => (),
        }
    }

    Ok(records)
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn read_records_fastq_style() {
        use std::io::Cursor;
        use crate::SeqRecord;
        use super::read_records;

        let data: Vec<u8> = b"@read1 length=8\nATCGATCG\n+\n!!!!!!!!\n@read2 length=4\nGGCA\n+\n!!!!\n".to_vec();
        let expected = vec![
            SeqRecord{ id: "read1".to_string(), seq: "ATCGATCG".to_string() },
            SeqRecord{ id: "read2".to_string(), seq: "GGCA".to_string() },
        ];

        let mut input: Cursor<Vec<u8>> = Cursor::new(data);
        let got = read_records(&mut input, '@').unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn read_records_fasta_style_appends_wrapped_lines() {
        use std::io::Cursor;
        use crate::SeqRecord;
        use super::read_records;

        let data: Vec<u8> = b">chr1 assembled\nATCGATCG\nGGCATTAC\n>chr2\nTTAA\n".to_vec();
        let expected = vec![
            SeqRecord{ id: "chr1".to_string(), seq: "ATCGATCGGGCATTAC".to_string() },
            SeqRecord{ id: "chr2".to_string(), seq: "TTAA".to_string() },
        ];

        let mut input: Cursor<Vec<u8>> = Cursor::new(data);
        let got = read_records(&mut input, '>').unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn read_records_keeps_lines_starting_with_c() {
        use std::io::Cursor;
        use crate::SeqRecord;
        use super::read_records;

        let data: Vec<u8> = b">chr1\nCCGTA\nCATG\n".to_vec();
        let expected = vec![
            SeqRecord{ id: "chr1".to_string(), seq: "CCGTACATG".to_string() },
        ];

        let mut input: Cursor<Vec<u8>> = Cursor::new(data);
        let got = read_records(&mut input, '>').unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn read_records_ignores_other_lines() {
        use std::io::Cursor;
        use crate::SeqRecord;
        use super::read_records;

        let data: Vec<u8> = b"; comment\n\n@read1\nTTAC\n+\nIIII\nNNNN\n".to_vec();
        let expected = vec![
            SeqRecord{ id: "read1".to_string(), seq: "TTAC".to_string() },
        ];

        let mut input: Cursor<Vec<u8>> = Cursor::new(data);
        let got = read_records(&mut input, '@').unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn read_records_content_before_marker() {
        use std::io::Cursor;
        use crate::SeqRecord;
        use super::read_records;

        let data: Vec<u8> = b"ATCG\n>chr1\nGGCA\n".to_vec();
        let expected = vec![
            SeqRecord{ id: "".to_string(), seq: "ATCG".to_string() },
            SeqRecord{ id: "chr1".to_string(), seq: "GGCA".to_string() },
        ];

        let mut input: Cursor<Vec<u8>> = Cursor::new(data);
        let got = read_records(&mut input, '>').unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn read_records_crlf_line_endings() {
        use std::io::Cursor;
        use crate::SeqRecord;
        use super::read_records;

        let data: Vec<u8> = b">chr1 assembled\r\nATCG\r\n".to_vec();
        let expected = vec![
            SeqRecord{ id: "chr1".to_string(), seq: "ATCG".to_string() },
        ];

        let mut input: Cursor<Vec<u8>> = Cursor::new(data);
        let got = read_records(&mut input, '>').unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn read_records_empty_input() {
        use std::io::Cursor;
        use super::read_records;

        let mut input: Cursor<Vec<u8>> = Cursor::new(Vec::new());
        let got = read_records(&mut input, '@').unwrap();

        assert!(got.is_empty());
    }
}
