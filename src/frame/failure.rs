use std::fmt;

use super::{short_type_name, Frame, Raised, Trace};

/// A raised error that remembers where it was raised and every point it was
/// propagated through with `traced!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    kind: String,
    args: Vec<String>,
    trace: Trace,
}

impl Failure {
    pub fn new(kind: impl Into<String>, args: Vec<String>, frame: Frame) -> Self {
        Failure {
            kind: kind.into(),
            args,
            trace: Trace::from_frames(vec![frame]),
        }
    }

    /// Builds a failure with an explicit trace, outermost frame first.
    pub fn with_trace(kind: impl Into<String>, args: Vec<String>, trace: Trace) -> Self {
        Failure {
            kind: kind.into(),
            args,
            trace,
        }
    }

    /// Wraps an arbitrary error. The kind is the error's type name without its path.
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E, frame: Frame) -> Self {
        Failure::new(
            short_type_name(std::any::type_name::<E>()),
            vec![err.to_string()],
            frame,
        )
    }

    /// Records that the failure passed through `frame` on its way out.
    pub fn called_from(mut self, frame: Frame) -> Self {
        self.trace.push_caller(frame);
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}

impl Raised for Failure {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn args(&self) -> Vec<String> {
        self.args.clone()
    }

    fn frames(&self) -> &[Frame] {
        self.trace.frames()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args.join(" "))
    }
}

impl std::error::Error for Failure {}

/// Raises a `Failure` of the given kind at the current line.
///
/// ```
/// use failctx::{raise, Failure};
///
/// fn parse_port(raw: &str) -> Result<u16, Failure> {
///     raw.parse().map_err(|_| raise!(ValueError, "bad port", raw))
/// }
///
/// let err = parse_port("http").unwrap_err();
/// assert_eq!(err.to_string(), "bad port http");
/// assert_eq!(err.kind(), "ValueError");
/// ```
#[macro_export]
macro_rules! raise {
    ($kind:ident) => {
        $crate::frame::Failure::new(stringify!($kind), ::std::vec::Vec::new(), $crate::here!())
    };
    ($kind:ident, $($arg:expr),+ $(,)?) => {
        $crate::frame::Failure::new(
            stringify!($kind),
            ::std::vec![$(::std::string::ToString::to_string(&$arg)),+],
            $crate::here!(),
        )
    };
}

/// Unwraps `Ok`, or returns the `Failure` with the current line recorded as a
/// propagation point.
#[macro_export]
macro_rules! traced {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Ok(value) => value,
            ::std::result::Result::Err(err) => {
                let failure: $crate::frame::Failure = err;
                return ::std::result::Result::Err(
                    ::std::convert::From::from(failure.called_from($crate::here!())),
                );
            }
        }
    };
}
