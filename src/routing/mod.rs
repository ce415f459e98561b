//! Route discovery subsystem.
//!
//! Turns the client's method descriptors into the two lookup tables the
//! dispatcher reads on every request.

pub mod table;

pub use table::RouteTable;
