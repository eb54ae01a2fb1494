pub mod failure;


use std::num::NonZeroUsize;
use std::panic::Location;
use std::path::PathBuf;

use crate::error::ContextError;
use crate::source::LineCache;
pub use failure::Failure;

/// One call-stack entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub file: PathBuf,
    pub line: NonZeroUsize,
    pub function: String,
    /// Line text captured alongside the frame, if any. Rendering never uses it.
    pub text: Option<String>,
}

impl Frame {
    pub fn new(
        file: impl Into<PathBuf>,
        line: usize,
        function: impl Into<String>,
    ) -> Result<Self, ContextError> {
        let line = NonZeroUsize::new(line).ok_or(ContextError::InvalidLine { line })?;
        Ok(Frame {
            file: file.into(),
            line,
            function: function.into(),
            text: None,
        })
    }

    /// Frame for the code that called this function. See `here!`.
    #[track_caller]
    pub fn caller(function: &str) -> Self {
        let location = Location::caller();
        Frame {
            file: PathBuf::from(location.file()),
            line: NonZeroUsize::new(location.line() as usize).unwrap_or(NonZeroUsize::MIN),
            function: function.to_string(),
            text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Frames ordered outermost first, innermost (the raise point) last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    frames: Vec<Frame>,
}

impl Trace {
    pub fn new() -> Self {
        Trace::default()
    }

    pub fn from_frames(frames: Vec<Frame>) -> Self {
        Trace { frames }
    }

    /// Records a propagation point. It becomes the new outermost frame.
    pub fn push_caller(&mut self, frame: Frame) {
        self.frames.insert(0, frame);
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn innermost(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn location(&self) -> Result<FrameLocation, ContextError> {
        FrameLocation::resolve(&self.frames, &mut LineCache::new())
    }
}

/// Something that was raised and can describe itself: a type name, its
/// argument values and the frames it passed through.
pub trait Raised {
    fn kind(&self) -> &str;

    fn args(&self) -> Vec<String>;

    /// Outermost first.
    fn frames(&self) -> &[Frame];

    fn message(&self) -> String {
        self.args().join(" ")
    }
}

impl Raised for anyhow::Error {
    fn kind(&self) -> &str {
        match find_failure(self) {
            Some(f) => f.kind(),
            None => "Error",
        }
    }

    fn args(&self) -> Vec<String> {
        match find_failure(self) {
            Some(f) => f.args().to_vec(),
            None => vec![self.to_string()],
        }
    }

    fn frames(&self) -> &[Frame] {
        match find_failure(self) {
            Some(f) => Raised::frames(f),
            None => &[],
        }
    }
}

fn find_failure(err: &anyhow::Error) -> Option<&Failure> {
    err.chain().find_map(|e| e.downcast_ref::<Failure>())
}

/// Where a failure surfaced, resolved from its innermost frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLocation {
    pub file_path: PathBuf,
    pub line_number: NonZeroUsize,
    pub function_name: String,
    pub source_line_text: String,
}

impl FrameLocation {
    pub fn from_raised<R: Raised + ?Sized>(failure: &R) -> Result<Self, ContextError> {
        FrameLocation::resolve(failure.frames(), &mut LineCache::new())
    }

    pub(crate) fn resolve(frames: &[Frame], cache: &mut LineCache) -> Result<Self, ContextError> {
        let frame = frames.last().ok_or(ContextError::NoFrames)?;
        let source_line_text = match &frame.text {
            Some(text) => text.trim().to_string(),
            None => cache.line(&frame.file, frame.line.get()).trim().to_string(),
        };
        Ok(FrameLocation {
            file_path: frame.file.clone(),
            line_number: frame.line,
            function_name: frame.function.clone(),
            source_line_text,
        })
    }
}

/// Reduces a `std::any::type_name` path to its last segment, dropping generic
/// arguments and closure markers: `a::b::Foo<c::Bar>` becomes `Foo`.
#[doc(hidden)]
pub fn short_type_name(full: &str) -> &str {
    let mut name = full;
    loop {
        let trimmed = name.trim_end_matches("::{{closure}}");
        let trimmed = strip_generics(trimmed);
        if trimmed.len() == name.len() {
            break;
        }
        name = trimmed;
    }
    name.rsplit("::").next().unwrap_or(name)
}

fn strip_generics(name: &str) -> &str {
    if !name.ends_with('>') {
        return name;
    }
    let mut depth = 0usize;
    for (idx, ch) in name.char_indices().rev() {
        match ch {
            // `->` in a fn pointer argument
            '>' if name[..idx].ends_with('-') => {}
            '>' => depth += 1,
            '<' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return &name[..idx];
                }
            }
            _ => {}
        }
    }
    name
}

/// Simple name of the enclosing function.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        $crate::frame::short_type_name(name.strip_suffix("::f").unwrap_or(name))
    }};
}

/// A `Frame` for the current line and function.
#[macro_export]
macro_rules! here {
    () => {
        $crate::frame::Frame::caller($crate::function_name!())
    };
}
