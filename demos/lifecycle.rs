use lifecycle_logger::{Error, Event, EventLogger, JsonSink, Logger, Signal};
use std::time::Duration;

/// Plays back a small startup/shutdown sequence as JSON log lines.
fn main() -> Result<(), Error> {
    let logger = EventLogger::new(JsonSink::new(std::io::stdout()));

    logger.log_event(&Event::LoggerInitialized {
        constructor: "demo::new_logger".to_owned(),
        err: None,
    })?;

    logger.log_event(&Event::Provided {
        constructor: "demo::new_buffer".to_owned(),
        module: "demo".to_owned(),
        output_types: vec!["demo::Buffer".to_owned(), "demo::Reader".to_owned()],
        err: None,
    })?;

    logger.log_event(&Event::OnStartExecuting {
        function: "hook.on_start".to_owned(),
        caller: "demo::new_buffer".to_owned(),
    })?;

    logger.log_event(&Event::OnStartExecuted {
        function: "hook.on_start".to_owned(),
        caller: "demo::new_buffer".to_owned(),
        runtime: Duration::from_millis(3),
        err: None,
    })?;

    logger.log_event(&Event::Started { err: None })?;

    logger.log_event(&Event::Stopping {
        signal: Signal::Interrupt,
    })?;

    logger.log_event(&Event::OnStopExecuted {
        function: "hook.on_stop".to_owned(),
        caller: "demo::new_buffer".to_owned(),
        runtime: Duration::from_micros(1500),
        err: Some("buffer already closed".into()),
    })?;

    Ok(())
}
