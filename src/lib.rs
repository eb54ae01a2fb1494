//! Print a failure's type, message and location together with the source
//! lines around the point where it was raised.
//!
//! ```no_run
//! use failctx::{print_failure_context, raise, traced, Failure};
//!
//! fn load() -> Result<(), Failure> {
//!     Err(raise!(ValueError, "bad value"))
//! }
//!
//! fn run() -> Result<(), Failure> {
//!     traced!(load());
//!     Ok(())
//! }
//!
//! if let Err(err) = run() {
//!     print_failure_context(&err, 2).unwrap();
//! }
//! ```

pub mod diagnostics;
pub mod error;
pub mod frame;
pub mod source;

pub use diagnostics::{
    print_failure_context, print_failure_context_default, render_failure_context,
    write_failure_context, ContextOptions, DEFAULT_CONTEXT_RADIUS,
};
pub use error::ContextError;
pub use frame::{Failure, Frame, FrameLocation, Raised, Trace};
