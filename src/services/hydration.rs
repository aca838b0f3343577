//! Turning decoded axes back into form text.

use serde::Serialize;

use crate::models::{AxisState, GridState};

/// Pre-filled textarea contents for the two axes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub x: String,
    pub y: String,
}

/// One `name: color` (or bare `color`) line per entry
pub fn format_axis(axis: &AxisState) -> String {
    axis.iter()
        .map(|entry| match entry.name.as_deref().map(form_name) {
            Some(name) if !name.is_empty() => format!("{name}: {}", entry.color),
            _ => entry.color.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A name as it can appear on a form line. `:` and `;` are separators
/// there, so they are replaced with spaces.
fn form_name(name: &str) -> String {
    name.split([':', ';'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Form text for a decoded state. Y stays blank when it equals X.
pub fn hydrate(state: Option<&GridState>) -> FormValues {
    let Some(state) = state else {
        return FormValues::default();
    };

    FormValues {
        x: format_axis(&state.x),
        y: if state.is_symmetric() {
            String::new()
        } else {
            format_axis(&state.y)
        },
    }
}
