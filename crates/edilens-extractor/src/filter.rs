//! Line filtering - selects candidate specification lines from raw text
//!
//! Specification PDFs render tables as loosely-spaced text; exact column
//! alignment cannot be assumed, so matching works by token adjacency
//! rather than fixed offsets. The filter is deliberately lossy: the
//! remote classifier exists to recover what these heuristics miss.

use edilens_domain::SegmentTag;

/// Usage phrases that mark a line as carrying requirement information.
const USAGE_PHRASES: [&str; 6] = [
    "MUST USE",
    "USED",
    "NOT USED",
    "MAY USE",
    "MANDATORY",
    "OPTIONAL",
];

/// Filter raw document text down to candidate specification lines.
///
/// A line qualifies when it contains a known segment tag as a standalone
/// token (or an inline element reference like `ST01`) AND either a
/// standalone `M`/`O` requirement marker or one of the usage phrases.
pub fn filter_spec_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let upper = line.to_uppercase();
            line_has_any_tag(&upper) && (has_requirement_marker(line) || has_usage_phrase(&upper))
        })
        .map(str::to_string)
        .collect()
}

/// True when the upper-cased line contains `tag` as a standalone token or
/// as an inline element reference (`ST01`, `ST02`, `ST03`).
pub(crate) fn line_has_tag(upper_line: &str, tag: SegmentTag) -> bool {
    let code = tag.as_str();
    upper_line.starts_with(&format!("{} ", code))
        || upper_line.starts_with(&format!("{}\t", code))
        || upper_line.contains(&format!(" {} ", code))
        || upper_line.contains(&format!("\t{} ", code))
        || upper_line.contains(&format!("{}01", code))
        || upper_line.contains(&format!("{}02", code))
        || upper_line.contains(&format!("{}03", code))
}

fn line_has_any_tag(upper_line: &str) -> bool {
    SegmentTag::ALL.iter().any(|tag| line_has_tag(upper_line, *tag))
}

/// True when a standalone `M` or `O` token appears in the raw line.
pub(crate) fn has_requirement_marker(line: &str) -> bool {
    line.contains(" M ")
        || line.contains(" O ")
        || line.starts_with("M ")
        || line.starts_with("O ")
        || line.ends_with(" M")
        || line.ends_with(" O")
        || line.contains("\tM\t")
        || line.contains("\tO\t")
}

/// True when the upper-cased line contains one of the usage phrases.
pub(crate) fn has_usage_phrase(upper_line: &str) -> bool {
    USAGE_PHRASES.iter().any(|p| upper_line.contains(p))
}

/// Summary of a filtering pass, for diagnostics.
#[derive(Debug, Clone)]
pub struct FilterReport {
    /// Non-blank lines in the input text
    pub total_lines: usize,

    /// Lines that qualified as specification lines
    pub filtered_lines: Vec<String>,

    /// Known tags observed across the filtered lines
    pub tags_found: Vec<SegmentTag>,

    /// Known tags with no filtered line
    pub tags_missing: Vec<SegmentTag>,
}

/// Run the filter and report which segment tags it picked up.
pub fn filter_report(text: &str) -> FilterReport {
    let total_lines = text.lines().filter(|l| !l.trim().is_empty()).count();
    let filtered_lines = filter_spec_lines(text);

    let mut tags_found = Vec::new();
    for tag in SegmentTag::ALL {
        let seen = filtered_lines
            .iter()
            .any(|line| line_has_tag(&line.to_uppercase(), tag));
        if seen {
            tags_found.push(tag);
        }
    }
    let tags_missing = SegmentTag::ALL
        .iter()
        .copied()
        .filter(|t| !tags_found.contains(t))
        .collect();

    FilterReport {
        total_lines,
        filtered_lines,
        tags_found,
        tags_missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_with_tag_and_marker_passes() {
        let lines = filter_spec_lines("ST M 1/1 Must Use - Transaction Set Header");
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_line_without_tag_excluded() {
        // Requirement marker but no known tag token
        let lines = filter_spec_lines("XXX M 1/1 some table row");
        assert!(lines.is_empty());
    }

    #[test]
    fn test_line_without_marker_or_phrase_excluded() {
        let lines = filter_spec_lines("ST appears here with no requirement info");
        assert!(lines.is_empty());
    }

    #[test]
    fn test_inline_element_reference_matches() {
        // ST01 counts as a segment reference even mid-word
        let lines = filter_spec_lines("Element ST01 is Mandatory per the standard");
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_usage_phrase_alone_suffices() {
        let lines = filter_spec_lines("PO1 baseline item data - Not Used");
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_blank_lines_dropped() {
        let text = "\n\n  \nST M 1/1 Used\n\n";
        let lines = filter_spec_lines(text);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], "ST M 1/1 Used");
    }

    #[test]
    fn test_lines_are_trimmed() {
        let lines = filter_spec_lines("   BAK M 1/1 Must Use   ");
        assert_eq!(lines[0], "BAK M 1/1 Must Use");
    }

    #[test]
    fn test_marker_is_case_sensitive_token() {
        // Lowercase "m" is not a requirement marker; "may use" phrase still hits
        let lines = filter_spec_lines("ST m 1/1 nothing else");
        assert!(lines.is_empty());
    }

    #[test]
    fn test_filter_report_tags() {
        let text = "ST M 1/1 Must Use\nPO1 O 1/100 Used\nrandom prose line";
        let report = filter_report(text);

        assert_eq!(report.total_lines, 3);
        assert_eq!(report.filtered_lines.len(), 2);
        assert!(report.tags_found.contains(&SegmentTag::St));
        assert!(report.tags_found.contains(&SegmentTag::Po1));
        assert!(report.tags_missing.contains(&SegmentTag::Isa));
    }
}
