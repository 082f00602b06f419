//! Static content shown on the landing page.
//!
//! Everything here is immutable and known at compile time. Templates borrow these
//! values directly, nothing is cloned per request.

mod business;
mod offering;

pub use business::*;
pub use offering::*;
