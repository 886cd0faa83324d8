use crate::{error::Error, sink::Sink, types::Record};
use std::io::Write;
use std::sync::Mutex;

/// Renders each record as a single-line JSON object and writes it,
/// newline-terminated, to the wrapped writer.
///
/// Key order follows the record: `level` first, then the fields in
/// dispatch order, `message` last. Values are escaped with `serde_json`.
/// The writer sits behind a mutex so one sink can serve concurrent
/// dispatches; each record is rendered fully before the lock is taken,
/// so lines never interleave.
#[derive(Debug)]
pub struct JsonSink<W> {
    writer: Mutex<W>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        // A poisoned lock means a writer panicked mid-write; the bytes are
        // still the best available evidence, so hand them back.
        match self.writer.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

fn render(record: &Record) -> Result<String, Error> {
    let mut line = String::with_capacity(128);
    line.push_str("{\"level\":");
    line.push_str(&serde_json::to_string(&record.level.to_string())?);
    for (key, value) in &record.fields {
        line.push_str(",\"");
        line.push_str(key);
        line.push_str("\":");
        line.push_str(&serde_json::to_string(value)?);
    }
    line.push_str(",\"message\":");
    line.push_str(&serde_json::to_string(record.message)?);
    line.push_str("}\n");
    Ok(line)
}

impl<W: Write> Sink for JsonSink<W> {
    fn emit(&self, record: &Record) -> Result<(), Error> {
        let line = render(record)?;
        let mut writer = match self.writer.lock() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        };
        writer.write_all(line.as_bytes())?;
        Ok(())
    }
}
