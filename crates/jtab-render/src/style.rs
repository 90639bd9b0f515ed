//! ANSI escape codes used by the renderer.
//!
//! The exact byte sequences are part of the output contract: callers
//! that capture rendered text (tests, golden files, downstream tools)
//! match on these codes literally.

/// Bold, used for record keys and table headers.
pub const BOLD: &str = "\x1b[1m";

/// Bright yellow, used for string scalars.
pub const STRING: &str = "\x1b[93m";

/// Cyan, used for numeric scalars.
pub const NUMBER: &str = "\x1b[36m";

/// Green, used for `true`.
pub const TRUE: &str = "\x1b[32m";

/// Red, used for `false`.
pub const FALSE: &str = "\x1b[31m";

/// Bright black, used for `null`.
pub const NULL: &str = "\x1b[90m";

/// Resets all attributes.
pub const RESET: &str = "\x1b[0m";

/// Wraps `text` in the given escape code, closing with [`RESET`].
pub fn paint(code: &str, text: &str) -> String {
    format!("{code}{text}{RESET}")
}
