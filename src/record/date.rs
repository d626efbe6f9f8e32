use crate::ascii::number::{Number, digit};
use crate::byte::is_byte;
use crate::parser::{ParseResult, Parser};
use crate::seq::Seq;
use std::cell::Cell;

/// Parser that matches an ISO calendar date, `YYYY-MM-DD`, without capturing it
pub fn iso_date() -> Seq<'static> {
    crate::seq![
        digit(),
        digit(),
        digit(),
        digit(),
        is_byte(b'-'),
        digit(),
        digit(),
        is_byte(b'-'),
        digit(),
        digit(),
    ]
}

/// Date fields read by a [`DateRecord`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Date {
    pub year: u64,
    pub month: u64,
    pub day: u64,
}

/// Caller-owned destination for a [`DateRecord`]
#[derive(Debug, Default)]
pub struct DateSlots {
    pub year: Cell<u64>,
    pub month: Cell<u64>,
    pub day: Cell<u64>,
}

impl DateSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of the slots
    pub fn snapshot(&self) -> Date {
        Date {
            year: self.year.get(),
            month: self.month.get(),
            day: self.day.get(),
        }
    }
}

/// Capturing parser for `YYYY-MM-DD`
///
/// Only the shape is checked; month and day are not range-validated.
#[derive(Debug, Clone, Copy)]
pub struct DateRecord<'slots> {
    slots: &'slots DateSlots,
}

impl<'slots> DateRecord<'slots> {
    pub fn new(slots: &'slots DateSlots) -> Self {
        DateRecord { slots }
    }

    fn pattern(&self) -> Seq<'slots> {
        let slots = self.slots;
        crate::seq![
            Number::fixed(&slots.year, 4),
            is_byte(b'-'),
            Number::fixed(&slots.month, 2),
            is_byte(b'-'),
            Number::fixed(&slots.day, 2),
        ]
    }
}

impl Parser for DateRecord<'_> {
    fn parse<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        self.pattern().parse(input)
    }

    fn recognize<'code>(&self, input: &'code [u8]) -> ParseResult<'code> {
        self.pattern().recognize(input)
    }
}
