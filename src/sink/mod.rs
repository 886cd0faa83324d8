use crate::{error::Error, types::Record};

pub use json::JsonSink;
pub use trace::TracingSink;

pub mod json;
pub mod trace;

/// Destination for structured log records.
///
/// A sink owns serialization and output; the dispatcher only decides what
/// to log. Implementations must preserve the record's field order and be
/// safe for concurrent use.
pub trait Sink {
    fn emit(&self, record: &Record) -> Result<(), Error>;
}
