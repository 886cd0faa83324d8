use crate::{
    error::Error,
    sink::Sink,
    types::{Level, Record},
};
use itertools::Itertools;
use tracing::{error, info};

/// Forwards records into the `tracing` ecosystem instead of serializing
/// them directly, for applications that already route their logs through
/// a `tracing` subscriber.
///
/// `tracing` events carry statically named fields, so the record's
/// ordered fields are rendered into a single `fields` value as
/// space-separated `key=value` pairs.
#[derive(Debug, Default)]
pub struct TracingSink {}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sink for TracingSink {
    fn emit(&self, record: &Record) -> Result<(), Error> {
        let fields = record
            .fields
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .join(" ");
        match record.level {
            Level::Info => info!(target: "lifecycle", fields = %fields, "{}", record.message),
            Level::Error => error!(target: "lifecycle", fields = %fields, "{}", record.message),
        }
        Ok(())
    }
}
