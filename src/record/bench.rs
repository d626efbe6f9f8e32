use crate::ascii::letter::Identifier;
use crate::ascii::number::Number;
use crate::ascii::whitespace::WhiteSpace;
use crate::literal::literal;
use crate::parser::{ParseResult, Parser};
use crate::seq::Seq;
use std::cell::Cell;

/// Figures read from a benchmark log line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BenchResult {
    pub ns_per_op: u64,
    pub bytes_per_op: u64,
    pub allocs_per_op: u64,
}

/// Caller-owned destination for a [`BenchRecord`]
#[derive(Debug, Default)]
pub struct BenchSlots {
    pub ns_per_op: Cell<u64>,
    pub bytes_per_op: Cell<u64>,
    pub allocs_per_op: Cell<u64>,
}

impl BenchSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> BenchResult {
        BenchResult {
            ns_per_op: self.ns_per_op.get(),
            bytes_per_op: self.bytes_per_op.get(),
            allocs_per_op: self.allocs_per_op.get(),
        }
    }
}

/// Capturing parser for a line such as
/// `Benchmark FuncnameXXX 23132 ns/op     823032 bytes/op    41 allocs/op`
///
/// The benchmark name must be made of ASCII letters only.
#[derive(Debug, Clone, Copy)]
pub struct BenchRecord<'slots> {
    slots: &'slots BenchSlots,
}

impl<'slots> BenchRecord<'slots> {
    pub fn new(slots: &'slots BenchSlots) -> Self {
        BenchRecord { slots }
    }

    fn pattern(&self) -> Seq<'slots> {
        let slots = self.slots;
        crate::seq![
            literal("Benchmark"),
            WhiteSpace,
            Identifier,
            WhiteSpace,
            Number::new(&slots.ns_per_op),
            WhiteSpace,
            literal("ns/op"),
            WhiteSpace,
            Number::new(&slots.bytes_per_op),
            WhiteSpace,
            literal("bytes/op"),
            WhiteSpace,
            Number::new(&slots.allocs_per_op),
            WhiteSpace,
            literal("allocs/op"),
        ]
    }
}

impl Parser for BenchRecord<'_> {
    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        self.pattern().parse(input)
    }

    fn recognize<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        self.pattern().recognize(input)
    }
}
