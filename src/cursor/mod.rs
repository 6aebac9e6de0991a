//! Bounds-checked cursors over byte slices.
//!
//! Every read or write goes through a length check first,
//! so a short buffer turns into `None` or an error instead of a panic.

mod reader;
mod writer;

pub(crate) use reader::Reader;
pub(crate) use writer::Writer;
