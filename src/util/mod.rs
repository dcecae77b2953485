//! Small shared helpers: tag parsing, date display, session storage.

pub mod datetime;
pub mod storage;
pub mod tags;
