//! Types shared by the publisher error and logging facilities
//!
//! - **Schema constants**: canonical structured-logging field keys and event names

pub mod schema;
