//! Public runtime API surface.
//!
//! Types a host interacts with: the handle it sends commands through, the
//! presentation seam it implements and the errors it may see.

pub mod errors;
pub mod handle;
pub mod presentation;

pub use errors::{AssetError, Result, RuntimeError};
pub use handle::RuntimeHandle;
pub use presentation::{Cue, PresentationAdapter};
