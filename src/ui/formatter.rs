//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.

use crate::boundary::BoundaryWarning;
use crate::domain::{Increment, Normalized};
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the normalized form of a tag and the part of it that matched.
pub fn display_normalized(tag: &str, normalized: &Normalized<'_>) {
    if normalized.is_versioned() {
        println!("{}", style(format!("Tag '{}'", tag)).bold());
        println!("  Normalized: {}", style(&normalized.normalized).green());
        println!("  Matched:    {}", style(normalized.matched).cyan());
    } else {
        println!("{} has no version number", style(format!("Tag '{}'", tag)).bold());
    }
}

/// Display an increment result.
///
/// Shows "From -> To" when the tag moved, otherwise notes it was kept.
pub fn display_increment(old_tag: &str, next: &Increment) {
    if next.incremented {
        println!("\n{}", style("Proposed Tag Change:").bold());
        println!("  From: {}", style(old_tag).red());
        println!("  To:   {}", style(&next.tag).green());
        if next.tag != next.version {
            println!("  Version: {}", next.version);
        }
    } else {
        println!("\n{}", style("Tag Unchanged:").bold());
        println!("  Tag: {}", style(&next.tag).yellow());
    }
}

/// Display the release date of the current tag and its date version.
pub fn display_release_date(release_date: &str, date_version: &str) {
    println!(
        "  Released: {} ({})",
        release_date,
        style(date_version).cyan()
    );
}

/// Display the build compatibility of a range.
pub fn display_compatibility(range: &str, minimum: u32, compatible: bool) {
    if compatible {
        display_success(&format!("'{}' supports builds from {} on", range, minimum));
    } else {
        display_error(&format!("'{}' reaches builds older than {}", range, minimum));
    }
}

/// Display manual push instruction for a tag.
pub fn display_manual_push_instruction(tag: &str, remote: &str) {
    println!(
        "\n{} To push this tag, run:\n  {}",
        style("→").yellow(),
        style(format!("git push {} {}", remote, tag)).cyan()
    );
}
