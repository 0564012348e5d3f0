//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use anyhow::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_compatibility, display_error, display_increment,
    display_manual_push_instruction, display_normalized, display_release_date, display_status,
    display_success,
};

/// Prompts user to confirm an action with a yes/no prompt.
///
/// Accepts "y" or "yes" (case-insensitive) as confirmation; Enter means no.
pub fn confirm_action(prompt: &str) -> Result<bool> {
    print!("\n{} (y/N): ", prompt);
    io::stdout().flush()?;

    let stdin = io::stdin();
    Ok(read_yes(&mut stdin.lock(), false)?)
}

/// Confirms creating a tag. Enter confirms; anything but 'y'/'yes' declines.
pub fn confirm_tag_creation(tag: &str) -> Result<bool> {
    print!("\nConfirm tag creation: {} (Y/n): ", tag);
    io::stdout().flush()?;

    let stdin = io::stdin();
    Ok(read_yes(&mut stdin.lock(), true)?)
}

/// Read one answer line; an empty answer yields `default`.
fn read_yes<R: BufRead>(input: &mut R, default: bool) -> io::Result<bool> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    let response = line.trim().to_lowercase();
    Ok(match response.as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    })
}
