use std::io::Write;
use std::path::PathBuf;
pub mod color;


use crate::error::ContextError;
use crate::frame::{FrameLocation, Raised};
use crate::source::LineCache;

pub const DEFAULT_CONTEXT_RADIUS: usize = 2;

/// Per-call rendering options.
#[derive(Debug, Clone)]
pub struct ContextOptions {
    pub context_radius: usize,
    pub color: bool,
    pub source_root: Option<PathBuf>,
}

impl Default for ContextOptions {
    fn default() -> Self {
        ContextOptions {
            context_radius: DEFAULT_CONTEXT_RADIUS,
            color: false,
            source_root: None,
        }
    }
}

impl ContextOptions {
    pub fn new() -> Self {
        ContextOptions::default()
    }

    pub fn radius(mut self, context_radius: usize) -> Self {
        self.context_radius = context_radius;
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_root = Some(root.into());
        self
    }
}

/// Inclusive window of line numbers around `line`, clamped at line 1 only.
pub fn context_window(line: usize, context_radius: usize) -> std::ops::RangeInclusive<usize> {
    let start = line.saturating_sub(context_radius).max(1);
    let end = line.saturating_add(context_radius);
    start..=end
}

pub fn render_failure_context<R: Raised + ?Sized>(
    failure: &R,
    options: &ContextOptions,
) -> Result<String, ContextError> {
    let mut cache = LineCache::with_root(options.source_root.clone());
    let location = FrameLocation::resolve(failure.frames(), &mut cache)?;
    let line = location.line_number.get();
    let window = context_window(line, options.context_radius);
    tracing::trace!(
        kind = failure.kind(),
        file = %location.file_path.display(),
        line,
        start = *window.start(),
        end = *window.end(),
        "Rendering failure context"
    );

    let mut out = String::new();
    out.push_str(&format!("{}: {}\n", failure.kind(), failure.message()));
    out.push_str(&color::location(
        &location.file_path.display().to_string(),
        line,
        &location.function_name,
        options.color,
    ));
    out.push('\n');
    out.push_str("\nCode context:\n");
    for n in window {
        // Always re-read from disk; the frame's own captured text is ignored here.
        let text = cache.line(&location.file_path, n);
        out.push_str(&format!("{} {:4} {}\n", color::marker(n == line, options.color), n, text));
    }
    Ok(out)
}

pub fn write_failure_context<W: Write, R: Raised + ?Sized>(
    writer: &mut W,
    failure: &R,
    options: &ContextOptions,
) -> Result<(), ContextError> {
    let rendered = render_failure_context(failure, options)?;
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Prints the failure's header, location and `context_radius` lines of source
/// on each side of the failing line to stdout.
pub fn print_failure_context<R: Raised + ?Sized>(
    failure: &R,
    context_radius: usize,
) -> Result<(), ContextError> {
    let options = ContextOptions::new().radius(context_radius);
    let rendered = render_failure_context(failure, &options)?;
    // One locked write per block so concurrent callers never split each other's output.
    let mut handle = std::io::stdout().lock();
    handle.write_all(rendered.as_bytes())?;
    handle.flush()?;
    Ok(())
}

pub fn print_failure_context_default<R: Raised + ?Sized>(failure: &R) -> Result<(), ContextError> {
    print_failure_context(failure, DEFAULT_CONTEXT_RADIUS)
}
