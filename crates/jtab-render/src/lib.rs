//! Colorized tree and table rendering for JSON-shaped data.
//!
//! The input model is [`serde_json::Value`]; [`render`] turns a value
//! into indented, ANSI-colored lines, switching to a box-drawn table
//! whenever a sequence holds uniformly-shaped records. Rendering is a
//! pure function of the value and a [`RenderOptions`], so callers can
//! use different settings per call.
//!
//! ```
//! use jtab_render::{render, RenderOptions};
//!
//! let value = serde_json::json!({"name": "jtab", "stable": true});
//! let text = render(&value, 0, &RenderOptions::default());
//! assert!(text.contains("name"));
//! ```

mod block;
mod options;
mod scalar;
pub mod style;
mod table;
pub mod text;

pub use block::render;
pub use options::RenderOptions;
pub use serde_json::Value;

/// Two spaces per indent level.
pub(crate) const INDENT: &str = "  ";
