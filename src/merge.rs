use crate::scan::StationTable;

/// Folds `local` into `global`, merging accumulators of shared keys.
pub fn merge_maps<'a>(mut global: StationTable<'a>, local: StationTable<'a>) -> StationTable<'a> {
    for (station, stats) in local {
        global
            .entry(station)
            .and_modify(|gstats| gstats.merge(&stats))
            .or_insert(stats);
    }
    global
}

/// Merges every per-chunk table into one. The largest table is used as the
/// seed so most keys are already in place.
pub fn merge_all<'a, I>(tables: I) -> Option<StationTable<'a>>
where
    I: IntoIterator<Item = StationTable<'a>>,
{
    let mut tables: Vec<_> = tables.into_iter().collect();
    let seed = (0..tables.len()).max_by_key(|&i| tables[i].len())?;
    let global = tables.swap_remove(seed);
    Some(tables.into_iter().fold(global, merge_maps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::ByteKey;
    use crate::scan::scan_chunk;

    const INPUT: &[u8] = b"Tokyo;35.6\nZurich;-3.1\nTokyo;12.0\nAbu Dhabi;41.2\n\
Zurich;8.4\nTokyo;-1.5\nAbu Dhabi;20.0\nZurich;0.0\nTokyo;22.2\n";

    fn split_tables(parts: &[std::ops::Range<usize>]) -> Vec<StationTable<'static>> {
        parts.iter().map(|r| scan_chunk(&INPUT[r.clone()], 16)).collect()
    }

    fn line_ranges() -> Vec<std::ops::Range<usize>> {
        let mut ranges = Vec::new();
        let mut start = 0;
        for (i, &b) in INPUT.iter().enumerate() {
            if b == b'\n' {
                ranges.push(start..i + 1);
                start = i + 1;
            }
        }
        ranges
    }

    #[test]
    fn merge_order_does_not_change_result() {
        let ranges = line_ranges();
        let forward = merge_all(split_tables(&ranges)).unwrap();
        let mut reversed = split_tables(&ranges);
        reversed.reverse();
        let reversed = merge_all(reversed).unwrap();
        let whole = scan_chunk(INPUT, 16);

        assert_eq!(forward.len(), whole.len());
        for (key, expected) in &whole {
            for merged in [&forward, &reversed] {
                let got = merged[key];
                assert_eq!(got.min, expected.min, "{key}");
                assert_eq!(got.max, expected.max, "{key}");
                assert_eq!(got.count, expected.count, "{key}");
                assert!((got.sum - expected.sum).abs() < 1e-9, "{key}");
            }
        }
    }

    #[test]
    fn disjoint_keys_are_inserted_as_is() {
        let merged = merge_maps(scan_chunk(b"a;1.0\n", 4), scan_chunk(b"b;2.0\n", 4));
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[&ByteKey::new(b"b")].sum, 2.0);
    }

    #[test]
    fn no_tables_merge_to_nothing() {
        assert!(merge_all(Vec::<StationTable<'static>>::new()).is_none());
    }

    #[test]
    fn empty_tables_do_not_disturb_the_merge() {
        let tables = vec![
            scan_chunk(b"", 4),
            scan_chunk(b"a;1.0\na;3.0\n", 4),
            scan_chunk(b"", 4),
        ];
        let merged = merge_all(tables).unwrap();
        assert_eq!(merged[&ByteKey::new(b"a")].count, 2);
    }
}
