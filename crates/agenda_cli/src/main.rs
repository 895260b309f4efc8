//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `agenda_core` linkage.
//! - Print detected amendments between two text files when given.
//!
//! Usage: `agenda_cli [<old-file> <new-file> [en|de]]`

use agenda_core::{diff_to_amendments_with, AmendmentOptions, Language};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("agenda_core ping={}", agenda_core::ping());
    println!("agenda_core version={}", agenda_core::core_version());

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => ExitCode::SUCCESS,
        [old_path, new_path, rest @ ..] if rest.len() <= 1 => {
            match print_amendments(old_path, new_path, rest.first().map(String::as_str)) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("error: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        _ => {
            eprintln!("usage: agenda_cli [<old-file> <new-file> [en|de]]");
            ExitCode::from(2)
        }
    }
}

fn print_amendments(old_path: &str, new_path: &str, language: Option<&str>) -> Result<(), String> {
    let language = match language {
        Some(value) => value.parse::<Language>()?,
        None => Language::default(),
    };
    let old_text = std::fs::read_to_string(old_path)
        .map_err(|err| format!("failed to read `{old_path}`: {err}"))?;
    let new_text = std::fs::read_to_string(new_path)
        .map_err(|err| format!("failed to read `{new_path}`: {err}"))?;

    let changes =
        diff_to_amendments_with(&old_text, &new_text, &AmendmentOptions::for_language(language));
    println!("changes={}", changes.len());
    for (position, change) in changes.iter().enumerate() {
        println!("[{}] {}", position + 1, change.short_label);
        println!("{}", change.formal_text);
        println!();
    }
    Ok(())
}
