use crate::types::Level;
use serde::Serialize;

/// A single structured log record, built fresh per event and handed to a
/// [`Sink`](crate::sink::Sink).
///
/// Field order is significant: it is fixed per event variant and sinks
/// must preserve it. A serialized record always renders `level` first and
/// `message` last, with the fields in between.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Record {
    pub level: Level,
    pub fields: Vec<(&'static str, String)>,
    pub message: &'static str,
}

impl Record {
    pub fn new(level: Level, fields: Vec<(&'static str, String)>, message: &'static str) -> Self {
        Self {
            level,
            fields,
            message,
        }
    }
}
