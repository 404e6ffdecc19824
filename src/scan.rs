use std::collections::HashMap;

use memchr::memchr;

use crate::key::ByteKey;
use crate::stats::Accumulator;

pub type StationTable<'a> = HashMap<ByteKey<'a>, Accumulator, ahash::RandomState>;

pub fn new_table<'a>(capacity: usize) -> StationTable<'a> {
    HashMap::with_capacity_and_hasher(capacity, ahash::RandomState::new())
}

/// Folds every well-formed line of `chunk` into a fresh table.
///
/// Lines without a `;` or with a value that does not parse as a float are
/// dropped. An unterminated tail is treated as a final line; planned chunks
/// only ever have one at end of input.
pub fn scan_chunk(chunk: &[u8], capacity: usize) -> StationTable<'_> {
    let mut table = new_table(capacity);
    let mut rest = chunk;

    while !rest.is_empty() {
        let line = match memchr(b'\n', rest) {
            Some(end) => {
                let line = &rest[..end];
                rest = &rest[end + 1..];
                line
            }
            None => std::mem::take(&mut rest),
        };

        if let Some((station, value)) = parse_line(line) {
            table
                .entry(station)
                .and_modify(|acc| acc.record(value))
                .or_insert_with(|| Accumulator::new(value));
        }
    }

    table
}

fn parse_line(line: &[u8]) -> Option<(ByteKey<'_>, f64)> {
    let delim = memchr(b';', line)?;
    let value = parse_value(&line[delim + 1..])?;
    Some((ByteKey::new(&line[..delim]), value))
}

/// Parses a decimal floating-point field. `None` if any byte is left over or
/// the value is not finite (`nan`, `inf`, overflow).
pub fn parse_value(field: &[u8]) -> Option<f64> {
    lexical_core::parse::<f64>(field)
        .ok()
        .filter(|v| v.is_finite())
}
