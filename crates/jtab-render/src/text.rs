//! Plain-text truncation.
//!
//! Truncation happens before any color is applied, so lengths here are
//! always counted in characters of the unstyled text.

/// Limits below this never get an overflow note, even when annotation
/// is requested. A note like ` (+12 more characters)` would eat the
/// whole budget.
const NOTE_THRESHOLD: usize = 24;

/// Result of [`truncate`]: the clipped text plus an optional overflow
/// note to append after any styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncated {
    /// The clipped text. Never contains a line break.
    pub text: String,
    /// Human-readable overflow note, e.g. ` (+3 more lines)`.
    pub note: Option<String>,
}

/// Clips `text` to at most `limit` characters, always cutting at the
/// first line break when one occurs earlier.
///
/// With `annotate` set and a limit above [`NOTE_THRESHOLD`], the cut is
/// described by a note (` (+N more lines)` or ` (+N more characters)`)
/// and the text is shortened further so that text plus note still fit
/// the limit. Otherwise the cut is marked with a `...` ellipsis, or
/// nothing at all when fewer than four characters survive.
///
/// The combined output is idempotent: feeding it back in returns it
/// unchanged.
pub fn truncate(text: &str, limit: Option<usize>, annotate: bool) -> Truncated {
    let total = text.chars().count();
    let max = limit.unwrap_or(usize::MAX);
    let (cut, at_break) = match text.chars().position(|c| c == '\n') {
        Some(pos) if pos < max => (pos, true),
        _ => (max, false),
    };

    if total <= cut {
        return Truncated {
            text: text.to_string(),
            note: None,
        };
    }

    if annotate && max > NOTE_THRESHOLD {
        let note = if at_break {
            format!(" (+{} more lines)", text.matches('\n').count())
        } else {
            format!(" (+{} more characters)", total - max)
        };
        let note_len = note.chars().count();
        if note_len < max {
            let budget = max.saturating_sub(note_len).min(cut);
            return Truncated {
                text: text.chars().take(budget).collect(),
                note: Some(note),
            };
        }
    }

    let clipped = if cut <= 3 {
        text.chars().take(cut).collect()
    } else {
        let mut kept: String = text.chars().take(cut - 3).collect();
        kept.push_str("...");
        kept
    };
    Truncated {
        text: clipped,
        note: None,
    }
}
