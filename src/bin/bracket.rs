//! Command-line harness: read a bracket request as JSON, print the scheduled bracket as JSON.
//! Run with: cargo run --bin bracket -- request.json
//! Reads stdin when no path is given. Log level via RUST_LOG (default: info).
//!
//! Request shape:
//! `{ "teams": [{"name": "A"}, ...], "settings": {...}, "start_date": "2024-06-01" }`
//! Every settings key is optional; `start_date` defaults to today.

use std::io::{self, Read};
use tournament_bracket::{generate_bracket, BracketRequest};

fn read_request(path: Option<String>) -> io::Result<BracketRequest> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    BracketRequest::from_json(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let request = read_request(std::env::args().nth(1))?;
    if let Err(e) = request.settings.validate() {
        log::error!("Invalid settings: {}", e);
        return Err(io::Error::new(io::ErrorKind::InvalidInput, e));
    }

    let bracket = generate_bracket(&request.teams, &request.settings, request.start_date_or_today());
    if bracket.is_empty() {
        log::warn!(
            "No matches generated for {} teams ({:?})",
            request.teams.len(),
            request.settings.bracket_type
        );
    }

    let out = serde_json::to_string_pretty(&bracket).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", out);
    Ok(())
}
