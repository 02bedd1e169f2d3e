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
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    // Find k-mer origins in PacBio long reads
    Pacbio {
        // Input reads, identifier lines marked with '@'
        #[arg(group = "input", required = true, help = "Input reads")]
        input_file: PathBuf,

        // Length of the k-mers to extract
        #[arg(short = 'k', long = "kmer-length", default_value_t = 10)]
        kmer_length: usize,

        // Output file prefix, defaults to "pacbio"
        #[arg(short = 'o', long = "output", required = false)]
        out_prefix: Option<String>,

        // Verbosity
        #[arg(long = "verbose", default_value_t = false)]
        verbose: bool,
    },

    // Find k-mer origins in Illumina short reads
    Illumina {
        // Input reads, identifier lines marked with '@'
        #[arg(group = "input", required = true, help = "Input reads")]
        input_file: PathBuf,

        // Length of the k-mers to extract
        #[arg(short = 'k', long = "kmer-length", default_value_t = 10)]
        kmer_length: usize,

        // Output file prefix, defaults to "illumina"
        #[arg(short = 'o', long = "output", required = false)]
        out_prefix: Option<String>,

        // Verbosity
        #[arg(long = "verbose", default_value_t = false)]
        verbose: bool,
    },

    // Find k-mer origins in an assembled genome
    Genome {
        // Input assembly, identifier lines marked with '>'
        #[arg(group = "input", required = true, help = "Input assembly")]
        input_file: PathBuf,

        // Length of the k-mers to extract
        #[arg(short = 'k', long = "kmer-length", default_value_t = 10)]
        kmer_length: usize,

        // Output file prefix, defaults to "genome"
        #[arg(short = 'o', long = "output", required = false)]
        out_prefix: Option<String>,

        // Verbosity
        #[arg(long = "verbose", default_value_t = false)]
        verbose: bool,
    },
}
