use derive_more::Display;
use serde::Serialize;
use std::time::Duration;

pub use event::{Event, Logger};
pub use record::Record;

pub mod event;
pub mod record;

/// An error embedded in an [`Event`], produced by whatever lifecycle step
/// failed upstream. The dispatcher only renders its `Display` text.
pub type EventError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Severity of an emitted [`Record`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[display("info")]
    Info,
    #[display("error")]
    Error,
}

/// Process signal that caused the application to stop.
///
/// `Display` output matches the conventional lower-case signal names
/// (`interrupt`, `terminated`, ...); the dispatcher upper-cases them
/// for the `signal` field.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    #[display("interrupt")]
    Interrupt,
    #[display("terminated")]
    #[serde(rename = "terminated")]
    Terminate,
    #[display("hangup")]
    Hangup,
    #[display("quit")]
    Quit,
    #[display("killed")]
    #[serde(rename = "killed")]
    Kill,
}

/// Renders a [`Duration`] the way Go's `time.Duration` stringer does
/// (`3ms`, `1.5s`, `1m30s`, `1h0m0s`, `0s`), which is the wire format
/// hook runtimes are reported in.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_owned();
    }
    if nanos < 1_000 {
        format!("{nanos}ns")
    } else if nanos < 1_000_000 {
        with_fraction(nanos, 1_000, "\u{b5}s")
    } else if nanos < 1_000_000_000 {
        with_fraction(nanos, 1_000_000, "ms")
    } else {
        let total_secs = nanos / 1_000_000_000;
        let hours = total_secs / 3600;
        let minutes = (total_secs / 60) % 60;
        let secs_nanos = nanos % 60_000_000_000;

        let mut out = String::new();
        if hours > 0 {
            out.push_str(&format!("{hours}h"));
        }
        if hours > 0 || minutes > 0 {
            out.push_str(&format!("{minutes}m"));
        }
        out.push_str(&with_fraction(secs_nanos, 1_000_000_000, "s"));
        out
    }
}

/// Whole value plus decimal fraction with trailing zeros trimmed,
/// e.g. 1_500_000ns at unit 1_000_000 renders as `1.5ms`.
fn with_fraction(nanos: u128, unit: u128, suffix: &str) -> String {
    let whole = nanos / unit;
    let rem = nanos % unit;
    if rem == 0 {
        return format!("{whole}{suffix}");
    }

    let width = unit.ilog10() as usize;
    let mut frac = format!("{rem:0width$}");
    while frac.ends_with('0') {
        frac.pop();
    }
    format!("{whole}.{frac}{suffix}")
}
