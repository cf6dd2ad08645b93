//! CLI output formatting.
//!
//! # Inventory Display
//!
//! Output is an inventory of what the catalog documents, not of files. Each
//! section gets a header line with its position and endpoint count; endpoints
//! follow, indented, identified by id, method, and path. Extra context
//! (descriptions, warnings) sits one level deeper.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! Sections
//! 001 인증 (Auth) (2 endpoints)
//!     1.1 POST /api/auth/login
//!     1.2 POST /api/auth/logout
//! 002 회원 (Users) (3 endpoints)
//!     2.1 POST /api/users/profile-image
//!
//! Generated 10 sections, 24 endpoints → api_reference.html
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 인증 (Auth) (2 endpoints)
//!     1.1 POST /api/auth/login
//!         Description: 이메일/비밀번호로 로그인하여 JWT 토큰을 발급받...
//!         Unlisted field: remember_me (rendered as string)
//!
//! 1 body field(s) fall back to string
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::catalog::{Catalog, EndpointRecord, Section};
use std::path::Path;

const DESCRIPTION_WIDTH: usize = 40;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// ```text
/// 001 인증 (Auth) (2 endpoints)
/// ```
fn section_header(index: usize, section: &Section) -> String {
    format!(
        "{} {} ({} endpoints)",
        format_index(index),
        section.name,
        section.apis.len()
    )
}

/// ```text
///     1.1 POST /api/auth/login
/// ```
fn endpoint_line(api: &EndpointRecord) -> String {
    format!("{}{} {} {}", indent(1), api.id, api.method, api.path)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    }
}

// ============================================================================
// Generate
// ============================================================================

/// Format the summary printed after the reference page is written.
pub fn format_generate_output(catalog: &Catalog, output_path: &Path) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];

    for (i, section) in catalog.sections.iter().enumerate() {
        lines.push(section_header(i + 1, section));
        lines.extend(section.apis.iter().map(endpoint_line));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} sections, {} endpoints \u{2192} {}",
        catalog.sections.len(),
        catalog.endpoint_count(),
        output_path.display()
    ));

    lines
}

pub fn print_generate_output(catalog: &Catalog, output_path: &Path) {
    for line in format_generate_output(catalog, output_path) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the catalog inventory with body fields that have no declared type.
///
/// Such fields still render, labelled `string`; this only makes them visible.
pub fn format_check_output(catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::new();
    let mut unlisted_total = 0;

    for (i, section) in catalog.sections.iter().enumerate() {
        lines.push(section_header(i + 1, section));
        for api in &section.apis {
            lines.push(endpoint_line(api));
            if !api.description.is_empty() {
                lines.push(format!(
                    "{}Description: {}",
                    indent(2),
                    truncate_desc(&api.description, DESCRIPTION_WIDTH)
                ));
            }
            for field in api.unlisted_fields() {
                lines.push(format!(
                    "{}Unlisted field: {} (rendered as string)",
                    indent(2),
                    field
                ));
                unlisted_total += 1;
            }
        }
    }

    lines.push(String::new());
    if unlisted_total == 0 {
        lines.push(format!(
            "Catalog OK: {} sections, {} endpoints",
            catalog.sections.len(),
            catalog.endpoint_count()
        ));
    } else {
        lines.push(format!("{} body field(s) fall back to string", unlisted_total));
    }

    lines
}

pub fn print_check_output(catalog: &Catalog) {
    for line in format_check_output(catalog) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
