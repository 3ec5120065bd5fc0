#![doc = include_str!("../../../README.md")]

mod cursor;
mod cursors;
pub mod eager;
mod error;
mod lookahead;
mod row;
mod view;
pub mod window;

pub use crate::{
    cursor::{BoxCursor, Cursor, EffectFn, PredicateFn, TransformFn},
    cursors::{
        ChainedCursor, ComprehensionCursor, CountingCursor, CyclicCursor, MappedCursor, PairZipCursor, SharedCursor,
        SharedSource, SnapshotCursor, SubsequenceCursor, TapCursor, ZippedCursor,
    },
    error::{EngineError, ErrorKind, TraverseResult},
    row::Row,
    view::View,
    window::Window,
};
