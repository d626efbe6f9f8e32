//! # TinyParsec - Minimal Parser Combinator Engine
//!
//! Parsers are plain values built once from a few primitives and combined
//! into a tree, then applied to byte input in a single synchronous pass.
//!
//! - **One contract**: every parser implements [`Parser::parse`], returning
//!   whether it matched and the remaining input
//! - **No partial consumption**: a failing parser always hands back exactly
//!   the input it was given, so alternatives restart from the same place
//! - **Capturing parsers**: parsers such as [`Number`] write what they
//!   matched into caller-owned [`std::cell::Cell`] slots
//!
//! ```
//! use std::cell::Cell;
//! use tinyparsec::{Number, Parser, WhiteSpace, literal, seq};
//!
//! let latency = Cell::new(0);
//! let line = seq![literal("took"), WhiteSpace, Number::new(&latency), literal("ms")];
//!
//! assert_eq!(line.parse(b"took 250ms"), (true, &b""[..]));
//! assert_eq!(latency.get(), 250);
//! ```

pub mod ascii;
pub mod byte;
pub mod complete;
pub mod error;
pub mod lazy;
pub mod literal;
pub mod not;
pub mod or;
pub mod parser;
pub mod record;
pub mod seq;

pub use ascii::{Identifier, Number, WhiteSpace, digit, letter};
pub use byte::{Byte, Range, is_byte, range};
pub use complete::parse_complete;
pub use error::ParseError;
pub use lazy::{Lazy, lazy};
pub use literal::{Literal, literal};
pub use not::{Not, NotExt, not};
pub use or::{Or, OrExt, or};
pub use parser::{ParseResult, Parser, boxed};
pub use record::{BenchRecord, BenchResult, BenchSlots, Date, DateRecord, DateSlots, iso_date};
pub use seq::{Seq, SeqExt, seq};
