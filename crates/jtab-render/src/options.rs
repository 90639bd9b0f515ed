//! Caller-facing rendering options.

/// Controls how scalar values are clipped when rendered.
///
/// The default performs no clipping beyond the standing rule that a
/// rendered scalar never spans more than one line.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Maximum characters per rendered scalar, `None` for unlimited.
    /// Multi-line strings are cut at the first line break regardless.
    pub max_scalar_len: Option<usize>,
    /// Describe what was cut (`(+N more lines)`, `(+N more characters)`)
    /// instead of marking it with a bare `...`. Only takes effect when
    /// the limit leaves room for the note.
    pub annotate_overflow: bool,
}
