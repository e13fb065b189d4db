//! Annotated rendering of syntax errors.
//!
//! ```text
//! {'a': 1, 'b'
//!            ^ help: <help text>
//! <offending text>
//! --- <message>
//! ```
//!
//! The help block only appears when the error carries a help string. Its
//! caret sits under the last non-space character before the offending span.

use crossterm::style::Stylize;

use crate::error::SyntaxError;
use crate::span::Span;

/// Longest underline drawn under the offending text.
const MAX_UNDERLINE: usize = 3;

/// Render `error` as annotated text, with terminal colours if `styled`.
pub fn render(error: &SyntaxError, styled: bool) -> String {
    let chars: Vec<char> = error.source_text().chars().collect();
    let span = error.span();
    let consumed = Span::new(error.pattern_span().start.min(span.start), span.start).slice(&chars);

    let mut out = String::new();
    if let Some(help) = error.help() {
        out.extend(consumed);
        out.push('\n');
        out.push_str(&" ".repeat(caret_column(consumed)));
        let line = format!("^ help: {help}");
        if styled {
            out.push_str(&line.cyan().bold().to_string());
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }

    out.extend(span.slice(&chars));
    out.push('\n');
    // An empty span (error at the end of the pattern) still gets one dash.
    let line = format!(
        "{} {}",
        "-".repeat(span.len().clamp(1, MAX_UNDERLINE)),
        error.message()
    );
    if styled {
        out.push_str(&line.red().bold().to_string());
    } else {
        out.push_str(&line);
    }
    out
}

/// Column of the last non-space character on the final line of `consumed`.
fn caret_column(consumed: &[char]) -> usize {
    let line_start = consumed
        .iter()
        .rposition(|&c| c == '\n')
        .map_or(0, |i| i + 1);
    consumed[line_start..]
        .iter()
        .rposition(|c| !c.is_whitespace())
        .unwrap_or(0)
}
