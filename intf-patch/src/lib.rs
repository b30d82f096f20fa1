//! Render validated interface-change tickets into RESTCONF YANG Patch
//! message-bodies and check them against expected fixtures.
//!
//! Validation itself lives in [`intf_model`]; this crate is the plumbing
//! around it:
//!
//! - [`ticket_file`] — read webhook tickets and fixture JSON from disk
//! - [`model`] — choose the base interface or switchport record
//! - [`payload`] — build the YANG Patch body for a record
//! - [`diff`] — structural JSON diff of rendered vs expected payloads
//! - [`scenarios`] — named ticket/expected pairs from TOML
//! - [`report`] — terminal-friendly colored output

pub mod diff;
pub mod model;
pub mod payload;
pub mod report;
pub mod scenarios;
pub mod ticket_file;
