//! Core domain logic for fair billing.
//!
//! This crate contains the fundamental types and logic for:
//! - Clock: `HH:MM:SS` timestamps as seconds since midnight
//! - Parsing: turning log lines into `Start`/`End` events
//! - Reading: building a time-ordered event stream from a log
//! - Billing: matching sessions per user and resolving orphans

pub mod billing;
pub mod clock;
pub mod event;
pub mod event_type;
pub mod parser;
pub mod reader;
pub mod stream;
pub mod types;

pub use billing::{ResultSet, UserSummary, bill, bill_with_landmarks};
pub use clock::{ClockError, Timestamp};
pub use event::Event;
pub use event_type::{EventKind, KindMatching, UnknownEventKind};
pub use parser::{LineParser, Rejection};
pub use reader::{LogReader, ReadError, ReadReport, ReadStats};
pub use stream::{EventStream, Landmarks};
pub use types::{Username, ValidationError};
