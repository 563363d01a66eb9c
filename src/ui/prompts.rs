// UI prompts and user interaction module

use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::core::cleaner::Confirmer;
use crate::core::task::SyncMode;
use crate::error::Result;

/// Ask user for an exact confirmation word (trimmed, case-insensitive)
/// Used before wiping the device
pub fn read_exact_confirmation<R: BufRead>(
    input: &mut R,
    prompt: &str,
    expected: &str,
) -> io::Result<bool> {
    print!("{}", prompt.white().bold());
    io::stdout().flush()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) => Ok(line.trim().eq_ignore_ascii_case(expected.trim())),
        Err(e) => {
            println!();
            println!("{}", format!("Error reading input: {}", e).red());
            println!("{}", "Operation cancelled for safety.".yellow());
            Err(e)
        }
    }
}

/// Show the numeric mode menu and read the answer.
/// Unrecognized answers (and end of input) select both categories.
pub fn select_mode<R: BufRead>(input: &mut R) -> io::Result<SyncMode> {
    println!("{}", "What do you want to sync?".white().bold());
    println!("  {} Music only", "1)".cyan().bold());
    println!("  {} Podcasts only", "2)".cyan().bold());
    println!("  {} Both", "3)".cyan().bold());
    print!("{}", "Choice [3]: ".white().bold());
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(SyncMode::from_menu_choice(&line))
}

/// Confirmer that asks on the terminal
pub struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm_wipe(&mut self, path: &Path, token: &str) -> Result<bool> {
        let banner = "!".repeat(60);
        println!();
        println!("{}", banner.red().bold());
        warn("You are about to delete EVERYTHING in:");
        println!("   -> {}", path.display().to_string().cyan());
        println!("{}", banner.red().bold());
        println!();

        let prompt = format!("Type '{}' to wipe the device folder and continue: ", token);
        let stdin = io::stdin();
        Ok(read_exact_confirmation(&mut stdin.lock(), &prompt, token)?)
    }
}

/// Display a warning message
pub fn warn(message: &str) {
    println!("{}", format!("⚠️  Warning: {}", message).yellow().bold());
}

/// Display an info message
pub fn info(message: &str) {
    println!("{}", message.cyan());
}

/// Display a success message
pub fn success(message: &str) {
    println!("{}", message.green().bold());
}

/// Display an error message
pub fn error(message: &str) {
    eprintln!("{}", message.red().bold());
}

/// Dimmed follow-up line for an error, written to the same stream
pub fn error_hint(message: &str) {
    eprintln!("{}", message.dimmed());
}
