//! Terminal rendering of field views.

use colored::{Color, Colorize};
use gentext_diff::{DisplaySpan, FieldView};

/// Concatenate spans, painting highlighted ones with `color` as background.
pub fn paint_spans(spans: &[DisplaySpan], color: Color) -> String {
    spans
        .iter()
        .map(|span| {
            if span.highlighted {
                span.text.on_color(color).to_string()
            } else {
                span.text.clone()
            }
        })
        .collect()
}

/// Render a field view as a two-column table: field name, then text.
pub fn render_field(view: &FieldView, color: Color) -> String {
    let mut out = String::new();
    if let Some(reference) = &view.reference {
        out.push_str(&format!(
            "{:<16} {}\n",
            reference.field_name.bold(),
            paint_spans(&reference.spans, color)
        ));
    }
    for (i, row) in view.candidates.iter().enumerate() {
        let label = if i == 0 {
            view.field_name.bold().to_string()
        } else {
            String::new()
        };
        let marker = if row.selected { "*" } else { " " };
        let score = row
            .score
            .map(|s| format!(" ({s:.3})").dimmed().to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "{label:<16} {marker} {}{score}\n",
            paint_spans(&row.spans, color)
        ));
    }
    out
}
