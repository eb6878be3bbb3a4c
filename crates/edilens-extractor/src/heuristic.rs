//! Local heuristic extraction - requirement records from filtered lines
//!
//! No network I/O; pure pattern matching. This pass is the fallback base
//! that remote classification results are merged over.

use crate::filter::line_has_tag;
use crate::types::RequirementMap;
use edilens_domain::{CompanyUsage, RequirementRecord, SegmentTag, X12Requirement};

/// Build a requirement record per segment tag from filtered lines.
///
/// The first matching tag in vocabulary order wins per line, so the
/// vocabulary order acts as a tie-break for overlapping tokens. Across
/// lines the merge is first-write-wins per field: once a line sets a
/// field, later lines can only fill fields that are still unset.
pub fn build_local_requirements(lines: &[String]) -> RequirementMap {
    let mut result = RequirementMap::new();

    for line in lines {
        let upper = line.to_uppercase();

        let Some(tag) = first_matching_tag(&upper) else {
            continue;
        };

        let usage_pair = extract_usage_pair(line);
        let record = RequirementRecord {
            x12_requirement: extract_requirement(line),
            company_usage: extract_usage(&upper),
            min_usage: usage_pair.map(|(min, _)| min),
            max_usage: usage_pair.map(|(_, max)| max),
        };

        result
            .entry(tag)
            .and_modify(|existing| existing.fill_missing(&record))
            .or_insert(record);
    }

    result
}

fn first_matching_tag(upper_line: &str) -> Option<SegmentTag> {
    SegmentTag::ALL
        .iter()
        .copied()
        .find(|tag| line_has_tag(upper_line, *tag))
}

/// Standalone `M` → mandatory, `O` → optional. M is tested first.
fn extract_requirement(line: &str) -> Option<X12Requirement> {
    let m = line.contains(" M ")
        || line.starts_with("M ")
        || line.ends_with(" M")
        || line.contains("\tM\t");
    if m {
        return Some(X12Requirement::Mandatory);
    }

    let o = line.contains(" O ")
        || line.starts_with("O ")
        || line.ends_with(" O")
        || line.contains("\tO\t");
    if o {
        return Some(X12Requirement::Optional);
    }

    None
}

/// Usage phrase priority chain, first match wins.
///
/// "NOT USED" must be tested before the bare "USED" check since the
/// former contains the latter.
fn extract_usage(upper_line: &str) -> Option<CompanyUsage> {
    if upper_line.contains("MUST USE") {
        Some(CompanyUsage::MustUse)
    } else if upper_line.contains("NOT USED") {
        Some(CompanyUsage::NotUsed)
    } else if upper_line.contains("MAY USE") {
        Some(CompanyUsage::Conditional)
    } else if upper_line.contains("USED") {
        Some(CompanyUsage::Used)
    } else {
        None
    }
}

/// Find the first `digits/digits` pattern anywhere in the line.
fn extract_usage_pair(line: &str) -> Option<(u32, u32)> {
    let bytes = line.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i < bytes.len() && bytes[i] == b'/' && i + 1 < bytes.len() && bytes[i + 1].is_ascii_digit() {
                let min: u32 = line[start..i].parse().ok()?;
                let max_start = i + 1;
                let mut j = max_start;
                while j < bytes.len() && bytes[j].is_ascii_digit() {
                    j += 1;
                }
                let max: u32 = line[max_start..j].parse().ok()?;
                return Some((min, max));
            }
        } else {
            i += 1;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_line_full_record() {
        let map = build_local_requirements(&lines(&["ST M 1/1 Must Use - Transaction Set Header"]));

        let record = &map[&SegmentTag::St];
        assert_eq!(record.x12_requirement, Some(X12Requirement::Mandatory));
        assert_eq!(record.company_usage, Some(CompanyUsage::MustUse));
        assert_eq!(record.min_usage, Some(1));
        assert_eq!(record.max_usage, Some(1));
    }

    #[test]
    fn test_optional_marker() {
        let map = build_local_requirements(&lines(&["PO1 O 1/100 May Use"]));

        let record = &map[&SegmentTag::Po1];
        assert_eq!(record.x12_requirement, Some(X12Requirement::Optional));
        assert_eq!(record.company_usage, Some(CompanyUsage::Conditional));
        assert_eq!(record.max_usage, Some(100));
    }

    #[test]
    fn test_not_used_beats_bare_used() {
        let map = build_local_requirements(&lines(&["ACK O 0/100 Not Used"]));
        assert_eq!(map[&SegmentTag::Ack].company_usage, Some(CompanyUsage::NotUsed));
    }

    #[test]
    fn test_bare_used() {
        let map = build_local_requirements(&lines(&["BAK M 1/1 Used"]));
        assert_eq!(map[&SegmentTag::Bak].company_usage, Some(CompanyUsage::Used));
    }

    #[test]
    fn test_first_write_wins_across_lines() {
        let map = build_local_requirements(&lines(&[
            "ST M - Transaction Set Header",
            "ST O 1/1 Used - repeated row",
        ]));

        let record = &map[&SegmentTag::St];
        // Line 1's requirement survives line 2; line 2 fills the rest
        assert_eq!(record.x12_requirement, Some(X12Requirement::Mandatory));
        assert_eq!(record.company_usage, Some(CompanyUsage::Used));
        assert_eq!(record.min_usage, Some(1));
        assert_eq!(record.max_usage, Some(1));
    }

    #[test]
    fn test_vocabulary_order_tie_break() {
        // Both GS and GE tokens appear; GS comes first in vocabulary order
        let map = build_local_requirements(&lines(&["GS M 1/1 and GE also mentioned Used"]));
        assert!(map.contains_key(&SegmentTag::Gs));
        assert!(!map.contains_key(&SegmentTag::Ge));
    }

    #[test]
    fn test_line_without_tag_is_skipped() {
        let map = build_local_requirements(&lines(&["no segment token here M 1/1"]));
        assert!(map.is_empty());
    }

    #[test]
    fn test_usage_pair_found_anywhere() {
        let map = build_local_requirements(&lines(&["CTT M Must Use occurs 1/1 times"]));
        let record = &map[&SegmentTag::Ctt];
        assert_eq!(record.min_usage, Some(1));
        assert_eq!(record.max_usage, Some(1));
    }

    #[test]
    fn test_no_usage_pair() {
        let map = build_local_requirements(&lines(&["SE M Must Use"]));
        let record = &map[&SegmentTag::Se];
        assert_eq!(record.min_usage, None);
        assert_eq!(record.max_usage, None);
    }

    #[test]
    fn test_multi_digit_usage_pair() {
        let map = build_local_requirements(&lines(&["PO1 O 10/200 Used"]));
        let record = &map[&SegmentTag::Po1];
        assert_eq!(record.min_usage, Some(10));
        assert_eq!(record.max_usage, Some(200));
    }
}
