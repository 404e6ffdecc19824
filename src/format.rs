use std::fmt;
use std::io::{self, Write};

use crate::key::ByteKey;
use crate::scan::StationTable;
use crate::stats::Accumulator;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationSummary<'a> {
    pub station: ByteKey<'a>,
    pub stats: Accumulator,
}

impl fmt::Display for StationSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={:.1}/{:.1}/{:.1}",
            self.station,
            round_tenth(self.stats.min),
            round_tenth(self.stats.mean()),
            round_tenth(self.stats.max)
        )
    }
}

// Half away from zero; adding 0.0 turns -0.0 into 0.0.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0 + 0.0
}

/// Orders the merged table by raw key bytes.
pub fn sorted(table: StationTable<'_>) -> Vec<StationSummary<'_>> {
    let mut rows: Vec<_> = table
        .into_iter()
        .map(|(station, stats)| StationSummary { station, stats })
        .collect();
    rows.sort_unstable_by(|a, b| a.station.cmp(&b.station));
    rows
}

pub fn write_summary<W: Write>(out: &mut W, rows: &[StationSummary<'_>]) -> io::Result<()> {
    out.write_all(b"{")?;
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.write_all(b", ")?;
        }
        write!(out, "{row}")?;
    }
    out.write_all(b"}")
}

pub fn render(rows: &[StationSummary<'_>]) -> String {
    let mut out = Vec::with_capacity(rows.len() * 24 + 2);
    write_summary(&mut out, rows).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan_chunk;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_tenth(0.25), 0.3);
        assert_eq!(round_tenth(-0.25), -0.3);
        assert_eq!(round_tenth(13.0), 13.0);
        assert_eq!(round_tenth(-0.04).to_string(), "0");
    }

    #[test]
    fn renders_min_mean_max() {
        let rows = sorted(scan_chunk(b"Hamburg;12.0\nHamburg;14.0\n", 4));
        assert_eq!(render(&rows), "{Hamburg=12.0/13.0/14.0}");
    }

    #[test]
    fn mean_is_rounded_to_one_decimal() {
        let rows = sorted(scan_chunk(b"x;1.0\nx;1.0\nx;2.0\n", 4));
        assert_eq!(render(&rows), "{x=1.0/1.3/2.0}");
    }

    #[test]
    fn keys_are_sorted_bytewise() {
        let rows = sorted(scan_chunk(b"Tokyo;1.0\nZurich;2.0\nAbu Dhabi;3.0\n", 4));
        assert_eq!(
            render(&rows),
            "{Abu Dhabi=3.0/3.0/3.0, Tokyo=1.0/1.0/1.0, Zurich=2.0/2.0/2.0}"
        );
    }

    #[test]
    fn negative_zero_is_not_rendered() {
        let rows = sorted(scan_chunk(b"Nuuk;-0.0\n", 4));
        assert_eq!(render(&rows), "{Nuuk=0.0/0.0/0.0}");
    }

    #[test]
    fn empty_table_renders_braces() {
        assert_eq!(render(&[]), "{}");
    }
}
