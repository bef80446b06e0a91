//! Catering budget domain
//!
//! Models and pure services. Nothing in this crate performs I/O, reads a
//! clock or logs; callers supply the pricing table.

pub mod model;
pub mod service;
