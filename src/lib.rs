#![doc = include_str!("../README.md")]

pub use crate::error::Error;
pub use crate::logger::EventLogger;
pub use crate::sink::{JsonSink, Sink, TracingSink};
pub use crate::types::*;

pub mod error;
pub mod logger;
pub mod sink;
pub mod types;
