//! Reads an HTML document from stdin and writes the extracted article as JSON
//! to stdout. Log output goes to stderr and is filtered with `RUST_LOG`.

use std::io::{self, Read};
use std::process::ExitCode;

use rs_readability::extract_bytes;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Output {
    parsed: bool,
    candidates: usize,
    content: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        eprintln!("Failed to read from stdin: {err}");
        return ExitCode::FAILURE;
    }

    let article = match extract_bytes(&html) {
        Ok(article) => article,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let output = Output {
        parsed: article.is_parsed(),
        candidates: article.candidate_count(),
        content: article.text(),
    };

    match serde_json::to_string(&output) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to serialize output: {err}");
            ExitCode::FAILURE
        }
    }
}
