//! Line emphasis specs such as `"23-32"` or `"2-4, 22-26"`.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Parsed line emphasis spec.
///
/// Components are separated by `,` and are either a line number or an
/// inclusive `a-b` range. Malformed components are dropped without failing
/// the rest of the spec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSpec {
    ranges: Vec<RangeInclusive<usize>>,
}

impl HighlightSpec {
    pub fn parse(spec: &str) -> Self {
        let ranges = spec
            .split(',')
            .filter_map(|component| {
                let range = parse_component(component);
                if range.is_none() && !component.trim().is_empty() {
                    tracing::trace!(component, "dropping malformed highlight component");
                }
                range
            })
            .collect();
        Self { ranges }
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Ranges as written, before clamping to a line count.
    pub fn ranges(&self) -> &[RangeInclusive<usize>] {
        &self.ranges
    }

    /// The surviving ranges in compact form, e.g. `" 17 , x, 19-21"` as
    /// `"17,19-21"`. Overlapping and adjacent ranges are merged; no line
    /// count clamping is applied, except that line `0` does not exist.
    pub fn normalized(&self) -> String {
        let mut ranges: Vec<(usize, usize)> = self
            .ranges
            .iter()
            .filter(|range| *range.end() >= 1)
            .map(|range| ((*range.start()).max(1), *range.end()))
            .collect();
        ranges.sort_unstable();

        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
        for (start, end) in ranges {
            match merged.last_mut() {
                Some((_, last_end)) if start <= last_end.saturating_add(1) => {
                    *last_end = (*last_end).max(end);
                }
                _ => merged.push((start, end)),
            }
        }

        merged
            .into_iter()
            .map(|(start, end)| {
                if start == end {
                    start.to_string()
                } else {
                    format!("{start}-{end}")
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Emphasized 1-indexed lines for a snippet with `line_count` lines.
    ///
    /// Each range is clamped to `1..=line_count`; a range with no overlap
    /// (including a lone `0`) contributes nothing.
    pub fn lines(&self, line_count: usize) -> BTreeSet<usize> {
        let mut lines = BTreeSet::new();
        for range in &self.ranges {
            let start = (*range.start()).max(1);
            let end = (*range.end()).min(line_count);
            if start <= end {
                lines.extend(start..=end);
            }
        }
        lines
    }
}

fn parse_component(component: &str) -> Option<RangeInclusive<usize>> {
    let component = component.trim();
    if component.is_empty() {
        return None;
    }
    let Some((start, end)) = component.split_once('-') else {
        let line = component.parse::<usize>().ok()?;
        return Some(line..=line);
    };
    let start = start.trim().parse::<usize>().ok()?;
    let end = end.trim().parse::<usize>().ok()?;
    (start <= end).then_some(start..=end)
}

/// Render a line set in compact form, e.g. `{17, 19, 20, 21}` as `"17,19-21"`.
pub fn compress_lines(lines: &BTreeSet<usize>) -> String {
    let mut parts = Vec::new();
    let mut iter = lines.iter().copied().peekable();
    while let Some(start) = iter.next() {
        let mut end = start;
        while iter.peek() == Some(&(end + 1)) {
            end += 1;
            iter.next();
        }
        if start == end {
            parts.push(start.to_string());
        } else {
            parts.push(format!("{start}-{end}"));
        }
    }
    parts.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(spec: &str, line_count: usize) -> Vec<usize> {
        HighlightSpec::parse(spec).lines(line_count).into_iter().collect()
    }

    #[test]
    fn test_single_range_is_inclusive() {
        assert_eq!(lines("23-32", 40), (23..=32).collect::<Vec<_>>());
    }

    #[test]
    fn test_mixed_components() {
        assert_eq!(lines("17,19-21", 30), [17, 19, 20, 21]);
    }

    #[test]
    fn test_whitespace_around_components_is_ignored() {
        assert_eq!(lines("2-4, 22-26", 30), [2, 3, 4, 22, 23, 24, 25, 26]);
        assert_eq!(lines(" 3 , 5 - 6 ", 10), [3, 5, 6]);
    }

    #[test]
    fn test_malformed_components_are_dropped() {
        assert_eq!(lines("abc,4", 10), [4]);
        assert_eq!(lines("7-3,2", 10), [2]);
        assert_eq!(lines("-3,1-,5", 10), [5]);
        assert_eq!(lines("1-2-3,6", 10), [6]);
        assert_eq!(lines(",,", 10), Vec::<usize>::new());
        assert!(HighlightSpec::parse("x-y").is_empty());
    }

    #[test]
    fn test_zero_lower_bound_clamps_to_first_line() {
        assert_eq!(lines("0-5", 10), [1, 2, 3, 4, 5]);
        assert_eq!(lines("0", 10), Vec::<usize>::new());
    }

    #[test]
    fn test_upper_bound_beyond_line_count_is_cut() {
        assert_eq!(lines("8-50", 10), [8, 9, 10]);
        assert_eq!(lines("11-20", 10), Vec::<usize>::new());
        assert_eq!(lines("99", 10), Vec::<usize>::new());
    }

    #[test]
    fn test_normalized_drops_malformed_components() {
        assert_eq!(HighlightSpec::parse(" 17 , x, 19-21").normalized(), "17,19-21");
        assert_eq!(HighlightSpec::parse("2-4, 22-26").normalized(), "2-4,22-26");
        assert_eq!(HighlightSpec::parse("garbage").normalized(), "");
    }

    #[test]
    fn test_normalized_merges_and_orders_ranges() {
        assert_eq!(HighlightSpec::parse("9,1-3,2-5,6").normalized(), "1-6,9");
        assert_eq!(HighlightSpec::parse("0,0-2").normalized(), "1-2");
    }

    #[test]
    fn test_overlapping_ranges_do_not_duplicate() {
        assert_eq!(lines("1-3,2-4,3", 10), [1, 2, 3, 4]);
    }

    #[test]
    fn test_ranges_keep_written_order() {
        let spec = HighlightSpec::parse("9, 1-2");
        assert_eq!(spec.ranges(), &[9..=9, 1..=2]);
    }

    #[test]
    fn test_compress_lines() {
        let set: BTreeSet<usize> = [17, 19, 20, 21].into_iter().collect();
        assert_eq!(compress_lines(&set), "17,19-21");
        assert_eq!(compress_lines(&BTreeSet::new()), "");
        let set: BTreeSet<usize> = (2..=4).chain(22..=26).collect();
        assert_eq!(compress_lines(&set), "2-4,22-26");
    }
}
