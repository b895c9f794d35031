use std::{fs, path::PathBuf};

use actix_web::{http::Method, ResponseError};
use anyhow::Context;
use clap::Parser;
use shortest_path_service::{
    service::{process, status_for, ErrorBody, JSON_CONTENT_TYPE},
    utility::init_tracing,
};

/// Answers a single request read from a file, without starting a server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Request in .json format with `graph`, `source` and `destination`
    #[arg(short, long)]
    request: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let body = fs::read(&args.request)
        .with_context(|| format!("unable to read {}", args.request.display()))?;

    let (status, response) = match process(&Method::POST, Some(JSON_CONTENT_TYPE), &body) {
        Ok(result) => (status_for(&result), serde_json::to_string_pretty(&result)?),
        Err(err) => {
            let status = err.status_code();
            let body = ErrorBody {
                error: err.to_string(),
            };
            (status, serde_json::to_string_pretty(&body)?)
        }
    };

    println!("{}", status);
    println!("{}", response);
    Ok(())
}
