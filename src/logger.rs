use crate::{
    error::Error,
    sink::Sink,
    types::{format_duration, Event, Level, Logger, Record},
};

/// Sink-backed [`Logger`] that maps each lifecycle event to its
/// structured record(s).
///
/// Dispatch is stateless, synchronous, and reentrant; concurrent use only
/// requires the sink to be safe for concurrent use. An event's embedded
/// error escalates the record to [`Level::Error`] and prepends an `error`
/// field carrying the error's rendered message.
#[derive(Debug)]
pub struct EventLogger<S> {
    sink: S,
}

impl<S> EventLogger<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: Sink> EventLogger<S> {
    fn emit(
        &self,
        level: Level,
        fields: Vec<(&'static str, String)>,
        message: &'static str,
    ) -> Result<(), Error> {
        self.sink.emit(&Record::new(level, fields, message))
    }
}

impl<S: Sink> Logger for EventLogger<S> {
    fn log_event(&self, event: &Event) -> Result<(), Error> {
        match event {
            Event::OnStartExecuting { function, caller } => self.emit(
                Level::Info,
                vec![("callee", function.clone()), ("caller", caller.clone())],
                "OnStart hook executing",
            ),
            Event::OnStartExecuted {
                function,
                caller,
                runtime,
                err,
            } => match err {
                Some(e) => self.emit(
                    Level::Error,
                    vec![
                        ("error", e.to_string()),
                        ("callee", function.clone()),
                        ("caller", caller.clone()),
                    ],
                    "OnStart hook failed",
                ),
                None => self.emit(
                    Level::Info,
                    vec![
                        ("callee", function.clone()),
                        ("caller", caller.clone()),
                        ("runtime", format_duration(*runtime)),
                    ],
                    "OnStart hook executed",
                ),
            },
            Event::OnStopExecuting { function, caller } => self.emit(
                Level::Info,
                vec![("callee", function.clone()), ("caller", caller.clone())],
                "OnStop hook executing",
            ),
            Event::OnStopExecuted {
                function,
                caller,
                runtime,
                err,
            } => match err {
                Some(e) => self.emit(
                    Level::Error,
                    vec![
                        ("error", e.to_string()),
                        ("callee", function.clone()),
                        ("caller", caller.clone()),
                    ],
                    "OnStop hook failed",
                ),
                None => self.emit(
                    Level::Info,
                    vec![
                        ("callee", function.clone()),
                        ("caller", caller.clone()),
                        ("runtime", format_duration(*runtime)),
                    ],
                    "OnStop hook executed",
                ),
            },
            Event::Supplied {
                type_name,
                module,
                err,
            } => match err {
                Some(e) => self.emit(
                    Level::Error,
                    vec![
                        ("error", e.to_string()),
                        ("type", type_name.clone()),
                        ("module", module.clone()),
                    ],
                    "supplied",
                ),
                None => self.emit(
                    Level::Info,
                    vec![("type", type_name.clone()), ("module", module.clone())],
                    "supplied",
                ),
            },
            Event::Provided {
                constructor,
                module,
                output_types,
                err,
            } => match err {
                Some(e) => self.emit(
                    Level::Error,
                    vec![("error", e.to_string()), ("module", module.clone())],
                    "error encountered while applying options",
                ),
                None => {
                    // One full record per output type name
                    for type_name in output_types {
                        self.emit(
                            Level::Info,
                            vec![
                                ("constructor", constructor.clone()),
                                ("module", module.clone()),
                                ("type", type_name.clone()),
                            ],
                            "provided",
                        )?;
                    }
                    Ok(())
                }
            },
            Event::Decorated {
                decorator,
                module,
                output_types,
                err,
            } => match err {
                Some(e) => self.emit(
                    Level::Error,
                    vec![("error", e.to_string()), ("module", module.clone())],
                    "error encountered while applying options",
                ),
                None => {
                    for type_name in output_types {
                        self.emit(
                            Level::Info,
                            vec![
                                ("decorator", decorator.clone()),
                                ("module", module.clone()),
                                ("type", type_name.clone()),
                            ],
                            "decorated",
                        )?;
                    }
                    Ok(())
                }
            },
            Event::Invoking { function, module } => self.emit(
                Level::Info,
                vec![("function", function.clone()), ("module", module.clone())],
                "invoking",
            ),
            Event::Invoked {
                function,
                stack,
                err,
            } => match err {
                Some(e) => self.emit(
                    Level::Error,
                    vec![
                        ("error", e.to_string()),
                        ("stack", stack.clone()),
                        ("function", function.clone()),
                    ],
                    "invoke failed",
                ),
                // Success is already reported by Invoking
                None => Ok(()),
            },
            Event::Started { err } => match err {
                Some(e) => self.emit(Level::Error, vec![("error", e.to_string())], "start failed"),
                None => self.emit(Level::Info, vec![], "started"),
            },
            Event::Stopping { signal } => self.emit(
                Level::Info,
                vec![("signal", signal.to_string().to_uppercase())],
                "received signal",
            ),
            Event::Stopped { err } => match err {
                Some(e) => self.emit(Level::Error, vec![("error", e.to_string())], "stop failed"),
                None => Ok(()),
            },
            Event::RollingBack { start_err } => self.emit(
                Level::Error,
                vec![("error", start_err.to_string())],
                "start failed, rolling back",
            ),
            Event::RolledBack { err } => match err {
                Some(e) => self.emit(
                    Level::Error,
                    vec![("error", e.to_string())],
                    "rollback failed",
                ),
                None => Ok(()),
            },
            Event::LoggerInitialized { constructor, err } => match err {
                Some(e) => self.emit(
                    Level::Error,
                    vec![("error", e.to_string())],
                    "custom logger initialization failed",
                ),
                None => self.emit(
                    Level::Info,
                    vec![("function", constructor.clone())],
                    "initialized custom event.Logger",
                ),
            },
        }
    }
}
