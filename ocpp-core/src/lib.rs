//! Typed message set for the OCPP XML-over-HTTP dialect.
//!
//! Each OCPP action is a request/response pair of plain serde types
//! plus a zero-sized marker implementing [`action::Action`], which
//! ties the pair to its wire name and request root element. The crate
//! holds no I/O; the companion client crate drives the HTTP exchange.

pub mod action;
pub mod messages;
pub mod types;
