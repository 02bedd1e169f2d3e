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
use std::fs::File;
use std::io::BufWriter;
use std::io::Read;
use std::path::Path;

use clap::Parser;
use flate2::read::MultiGzDecoder;
use log::info;

use alku::Technology;

mod cli;

type E = Box<dyn std::error::Error>;

/// Initializes the logger with verbosity given in `log_max_level`.
fn init_log(log_max_level: usize) {
    stderrlog::new()
    .module(module_path!())
    .quiet(false)
    .verbosity(log_max_level)
    .timestamp(stderrlog::Timestamp::Off)
    .init()
    .unwrap();
}

/// Opens `path` for reading, decompressing gzipped contents transparently.
fn open_input(path: &Path) -> Result<Box<dyn Read>, E> {
    let conn = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(MultiGzDecoder::new(conn)))
    } else {
        Ok(Box::new(conn))
    }
}

/// Runs the pipeline for one input and writes the two output files.
///
/// Output files are only created after the whole pipeline has succeeded so
/// a failed run leaves nothing behind.
fn run(
    input_file: &Path,
    technology: Technology,
    kmer_length: usize,
    out_prefix: Option<&str>,
) -> Result<(), E> {
    let mut conn_in = open_input(input_file)?;
    let records = alku::parser::read_records(&mut conn_in, technology.marker())?;
    info!("Read {} records from {}", records.len(), input_file.display());

    let (distinct, origins) = alku::find_origins(&records, kmer_length)?;
    info!("Found {} distinct {}-mers with {} origins", distinct.len(), kmer_length, origins.len());

    let prefix = out_prefix.unwrap_or(technology.output_prefix());

    let conn = File::create(format!("{}_kmers.txt", prefix))?;
    let mut conn_out = BufWriter::new(conn);
    alku::printer::write_distinct_kmers(&distinct, &mut conn_out)?;

    let conn = File::create(format!("{}_kmer_origins.tsv", prefix))?;
    let mut conn_out = BufWriter::new(conn);
    alku::printer::write_origins(&origins, &records, &mut conn_out)?;

    Ok(())
}

fn main() {
    let cli = cli::Cli::parse();

    // Subcommands:
    let result = match &cli.command {
        // PacBio long reads
        Some(cli::Commands::Pacbio {
            input_file,
            kmer_length,
            out_prefix,
            verbose,
        }) => {
            init_log(if *verbose { 2 } else { 1 });
            run(input_file, Technology::Pacbio, *kmer_length, out_prefix.as_deref())
        },

        // Illumina short reads
        Some(cli::Commands::Illumina {
            input_file,
            kmer_length,
            out_prefix,
            verbose,
        }) => {
            init_log(if *verbose { 2 } else { 1 });
            run(input_file, Technology::Illumina, *kmer_length, out_prefix.as_deref())
        },

        // Assembled genome
        Some(cli::Commands::Genome {
            input_file,
            kmer_length,
            out_prefix,
            verbose,
        }) => {
            init_log(if *verbose { 2 } else { 1 });
            run(input_file, Technology::Genome, *kmer_length, out_prefix.as_deref())
        },

        None => {
            use clap::CommandFactory;
            let _ = cli::Cli::command().print_help();
            Ok(())
        },
    };

    if let Err(err) = result {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
