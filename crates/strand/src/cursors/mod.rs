//! The cursor adapters and base sources.
//!
//! Each adapter consumes its upstream as a [`BoxCursor`](crate::BoxCursor)
//! and is constructed by the [`View`](crate::View) layer at traversal time;
//! nothing here is re-usable across traversals.

mod chained;
mod comprehension;
mod cyclic;
mod mapped;
mod source;
mod subsequence;
mod tap;
mod zipped;

pub use chained::ChainedCursor;
pub use comprehension::ComprehensionCursor;
pub use cyclic::CyclicCursor;
pub use mapped::MappedCursor;
pub use source::{CountingCursor, SharedCursor, SharedSource, SnapshotCursor};
pub use subsequence::SubsequenceCursor;
pub use tap::TapCursor;
pub use zipped::{PairZipCursor, ZippedCursor};
