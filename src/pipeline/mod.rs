//! The request pipeline every route sits behind.
//!
//! Stages, outermost first:
//!
//! 1. [`ResponseBoundary`]: creates the request's [`Exchange`] and starts it
//!    once the inner pipeline has produced a response (or an error).
//! 2. [`ResponseTiming`]: measures downstream latency and reports it from an
//!    on-starting callback.
//! 3. [`Identification`]: queues the fixed identification headers.
//!
//! Header names are lowercase here as required by `HeaderName::from_static`;
//! HTTP header names are case-insensitive, so `x-response-time-ms` is the
//! `X-Response-time-Ms` header on the wire.

pub mod exchange;
pub mod identification;
pub mod timing;

pub use exchange::{Exchange, ResponseBoundary};
pub use identification::Identification;
pub use timing::ResponseTiming;

pub const RESPONSE_TIME_HEADER: &str = "x-response-time-ms";
pub const STUDENT_NAME_HEADER: &str = "x-student-name";
pub const STUDENT_GROUP_HEADER: &str = "x-student-group";
