//! Helpers built on top of [`BiIterator`](crate::BiIterator)
//!
//! - [`reversed`]: lazy replay from the back
//! - [`drain`]: eager head/tail extraction that skips the interior

mod drain;
mod reversed;

pub use drain::{drain, Drained};
pub use reversed::{reversed, Reversed};
