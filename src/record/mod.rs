//! Capturing parsers for whole structured records
//!
//! Each record borrows a caller-owned set of slots and implements
//! [`crate::Parser`] as a sequence of capturing fields interleaved with
//! literals. After a successful parse every slot holds the value read from
//! the input, in field order. After a failed parse the slots of fields matched
//! before the failure may already have been overwritten.

pub mod bench;
pub mod date;

pub use bench::{BenchRecord, BenchResult, BenchSlots};
pub use date::{Date, DateRecord, DateSlots, iso_date};
