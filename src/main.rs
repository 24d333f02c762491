// Copyright 2026-present titlerank contributors
// SPDX-License-Identifier: Apache-2.0

//! The titlerank command-line interface.
//!
//! Two subcommands: `score` for a single (query, title) pair, and `rank` to
//! order a candidate list best-first. Candidates come from the command line
//! or one-per-line on stdin, which makes it pipeline-friendly:
//!
//! ```text
//! cat titles.txt | titlerank rank "naruto ninja" --limit 10
//! ```

use clap::{Parser, Subcommand};
use std::io::{self, BufRead};
use std::process::ExitCode;

use titlerank::{classify_with, rank_titles, EnglishStemmer, IdentityStemmer};

#[derive(Parser)]
#[command(
    name = "titlerank",
    about = "Fuzzy title-relevance scoring for search results",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one candidate title against a query
    Score {
        /// The user-entered search query
        query: String,

        /// The candidate title to score
        title: String,

        /// Also print which tier produced the score
        #[arg(short, long)]
        verbose: bool,

        /// Disable English stemming (compare raw tokens)
        #[arg(long)]
        identity: bool,
    },

    /// Rank candidate titles against a query, best first
    Rank {
        /// The user-entered search query
        query: String,

        /// Candidate titles; read one per line from stdin when omitted
        titles: Vec<String>,

        /// Maximum number of results to print (0 = all)
        #[arg(short, long, default_value = "0")]
        limit: usize,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,

        /// Disable English stemming (compare raw tokens)
        #[arg(long)]
        identity: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            query,
            title,
            verbose,
            identity,
        } => run_score(&query, &title, verbose, identity),
        Commands::Rank {
            query,
            titles,
            limit,
            json,
            identity,
        } => run_rank(&query, titles, limit, json, identity),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("titlerank: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_score(query: &str, title: &str, verbose: bool, identity: bool) -> io::Result<()> {
    let relevance = if identity {
        classify_with(&IdentityStemmer, title, query)
    } else {
        classify_with(&EnglishStemmer, title, query)
    };

    if verbose {
        println!("{:.2}\t{}", relevance.score, relevance.tier);
    } else {
        println!("{:.2}", relevance.score);
    }
    Ok(())
}

fn run_rank(
    query: &str,
    titles: Vec<String>,
    limit: usize,
    json: bool,
    identity: bool,
) -> io::Result<()> {
    let titles = if titles.is_empty() {
        read_titles_from_stdin()?
    } else {
        titles
    };

    let mut ranked = if identity {
        rank_titles(&IdentityStemmer, query, &titles)
    } else {
        rank_titles(&EnglishStemmer, query, &titles)
    };

    if limit > 0 {
        ranked.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    // Aligned, human-readable output on a terminal; bare score<TAB>title when
    // piped so downstream tools can cut on tabs.
    let tty = atty::is(atty::Stream::Stdout);
    for r in &ranked {
        if tty {
            println!("{:>6.2}  {:<18}  {}", r.score, r.tier.to_string(), r.title);
        } else {
            println!("{:.2}\t{}", r.score, r.title);
        }
    }
    Ok(())
}

/// One candidate per line; blank lines are skipped.
fn read_titles_from_stdin() -> io::Result<Vec<String>> {
    let mut titles = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            titles.push(line);
        }
    }
    Ok(titles)
}
