//! Edilens Cross-Reference Reporter
//!
//! Projects a merged requirement map against the segment tags observed
//! in a decoded transaction. Pure projection: one row per tag in the
//! merged map, no additional inference.

#![warn(missing_docs)]

use edilens_domain::{RequirementRecord, SegmentTag};
use serde::Serialize;
use std::collections::BTreeMap;

/// Rendered status label for a segment present in the transaction.
pub const STATUS_PRESENT: &str = "✓ Present";

/// Rendered status label for a segment missing from the transaction.
pub const STATUS_MISSING: &str = "✗ Missing";

/// One row of the cross-reference report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossRefRow {
    /// The segment tag
    pub segment_tag: String,

    /// X12 requirement, or "unknown"
    pub x12_requirement: String,

    /// Company usage, or "unknown"
    pub company_usage: String,

    /// Minimum usage count, or "N/A"
    pub min_usage: String,

    /// Maximum usage count, or "N/A"
    pub max_usage: String,

    /// Whether the tag was observed in the transaction
    pub present_in_edi: bool,

    /// Human status label
    pub status: String,
}

/// Build the cross-reference report, sorted lexicographically by tag.
///
/// Rows cover exactly the tags in the merged requirement map; observed
/// tags outside the map do not produce rows.
pub fn build_cross_reference(
    requirements: &BTreeMap<SegmentTag, RequirementRecord>,
    observed_tags: &[String],
) -> Vec<CrossRefRow> {
    let mut rows: Vec<CrossRefRow> = requirements
        .iter()
        .map(|(tag, record)| {
            let present = observed_tags.iter().any(|t| t == tag.as_str());
            CrossRefRow {
                segment_tag: tag.as_str().to_string(),
                x12_requirement: record
                    .x12_requirement
                    .map(|r| r.as_str().to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
                company_usage: record
                    .company_usage
                    .map(|u| u.as_str().to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
                min_usage: record
                    .min_usage
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
                max_usage: record
                    .max_usage
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
                present_in_edi: present,
                status: if present {
                    STATUS_PRESENT.to_string()
                } else {
                    STATUS_MISSING.to_string()
                },
            }
        })
        .collect();

    rows.sort_by(|a, b| a.segment_tag.cmp(&b.segment_tag));
    rows
}
