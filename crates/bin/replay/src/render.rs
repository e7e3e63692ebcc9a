//! Rendering of the final page state.

use std::fmt::Write as _;

use tunerdash_adapter_memory::{InMemoryPage, NodeState};

use crate::config::OutputFormat;

/// Render every node of `page` in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(page: &InMemoryPage, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&page.dump()),
        OutputFormat::Text => Ok(render_text(page)),
    }
}

fn render_text(page: &InMemoryPage) -> String {
    let mut out = String::new();
    for (key, states) in page.dump() {
        for state in states {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{key:<22} {}", describe(&state));
        }
    }
    out
}

fn describe(state: &NodeState) -> String {
    let mut parts = Vec::new();
    if let Some(text) = &state.text {
        parts.push(format!("{text:?}"));
    }
    if !state.classes.is_empty() {
        parts.push(format!("[{}]", state.class_name()));
    }
    if let Some(value) = &state.value {
        parts.push(format!("value={value}"));
    }
    if let Some(checked) = state.checked {
        parts.push(format!("checked={checked}"));
    }
    if let Some(color) = &state.color {
        parts.push(format!("color={color}"));
    }
    if !state.visible {
        parts.push("hidden".to_string());
    }
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" ")
    }
}
