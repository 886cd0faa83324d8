use crate::{
    error::Error,
    types::{EventError, Signal},
};
use std::time::Duration;

/// One discrete occurrence during an application's managed
/// startup/shutdown sequence.
///
/// Events are produced by the bootstrap machinery and borrowed read-only
/// by a [`Logger`] for the duration of one call. Variants whose step can
/// fail carry the failure as an optional embedded error; the error is
/// data, not a fault of the logger.
#[derive(Debug)]
#[non_exhaustive]
pub enum Event {
    /// An `OnStart` hook is about to run.
    OnStartExecuting {
        /// Name of the hook function
        function: String,
        /// Name of the caller that registered the hook
        caller: String,
    },
    /// An `OnStart` hook finished running.
    OnStartExecuted {
        function: String,
        caller: String,
        /// How long the hook ran for
        runtime: Duration,
        err: Option<EventError>,
    },
    /// An `OnStop` hook is about to run.
    OnStopExecuting { function: String, caller: String },
    /// An `OnStop` hook finished running.
    OnStopExecuted {
        function: String,
        caller: String,
        runtime: Duration,
        err: Option<EventError>,
    },
    /// A value was supplied to the container directly.
    Supplied {
        /// Type name of the supplied value
        type_name: String,
        /// Owning module, empty when supplied at the top level
        module: String,
        err: Option<EventError>,
    },
    /// A constructor was registered, producing one or more output types.
    Provided {
        constructor: String,
        module: String,
        /// Type names the constructor outputs, one record is emitted per name
        output_types: Vec<String>,
        err: Option<EventError>,
    },
    /// A decorator was registered, wrapping one or more output types.
    Decorated {
        decorator: String,
        module: String,
        output_types: Vec<String>,
        err: Option<EventError>,
    },
    /// An invoked function is about to run.
    Invoking { function: String, module: String },
    /// An invoked function finished running. Only a failure is reported;
    /// the success case emits nothing.
    Invoked {
        function: String,
        /// Call stack captured at the point of failure, may be empty
        stack: String,
        err: Option<EventError>,
    },
    /// The application finished starting.
    Started { err: Option<EventError> },
    /// The application is stopping in response to a signal.
    Stopping { signal: Signal },
    /// The application finished stopping. Only a failure is reported.
    Stopped { err: Option<EventError> },
    /// A start failure triggered a rollback of the work done so far.
    RollingBack {
        /// The error that aborted startup
        start_err: EventError,
    },
    /// A rollback finished. Only a failure is reported.
    RolledBack { err: Option<EventError> },
    /// A custom logger was installed for the rest of the lifecycle.
    LoggerInitialized {
        /// Name of the constructor that built the logger
        constructor: String,
        err: Option<EventError>,
    },
}

/// Receives lifecycle events, one call per event.
///
/// Implementations must not retain the borrowed event and must be safe to
/// call from multiple threads at once; the only failure an implementation
/// may surface is its output sink failing.
pub trait Logger {
    fn log_event(&self, event: &Event) -> Result<(), Error>;
}
