//! Element data-type codes and their tiered resolution.
//!
//! Resolution runs through three tiers, strictly in order:
//!
//! 1. an exact table keyed by `{tag}{position:02}` for well-known fields;
//! 2. a keyword scan over the element description;
//! 3. a per-tag positional default table.
//!
//! The final fallback is `AN`. Later tiers only apply when earlier ones
//! yield no match.

use crate::segment::SegmentTag;
use std::fmt;

/// X12 element data-type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// Identifier drawn from a code list
    Id,
    /// Alphanumeric string
    An,
    /// Date (CCYYMMDD or YYMMDD)
    Dt,
    /// Time (HHMM)
    Tm,
    /// Decimal number
    R,
    /// Numeric, zero implied decimal places
    N0,
}

impl DataType {
    /// The 2-3 character code used in rendered output.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Id => "ID",
            DataType::An => "AN",
            DataType::Dt => "DT",
            DataType::Tm => "TM",
            DataType::R => "R",
            DataType::N0 => "N0",
        }
    }

    /// Resolve the data type for an element.
    ///
    /// `description` is the element description as produced by
    /// [`crate::vocabulary::element_description`]; the keyword tier
    /// inspects it case-insensitively.
    pub fn resolve(tag: SegmentTag, position: usize, description: &str) -> DataType {
        if let Some(dt) = exact_lookup(tag, position) {
            return dt;
        }
        if let Some(dt) = keyword_lookup(description) {
            return dt;
        }
        tag_default(tag)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tier 1: exact `{tag}{position:02}` table for well-known fields.
fn exact_lookup(tag: SegmentTag, position: usize) -> Option<DataType> {
    let dt = match (tag, position) {
        (SegmentTag::Isa, 9) => DataType::Dt,
        (SegmentTag::Isa, 10) => DataType::Tm,
        (SegmentTag::Isa, 13) => DataType::N0,
        (SegmentTag::Gs, 4) => DataType::Dt,
        (SegmentTag::Gs, 5) => DataType::Tm,
        (SegmentTag::Gs, 6) => DataType::N0,
        (SegmentTag::Bak, 4) => DataType::Dt,
        (SegmentTag::Po1, 2) => DataType::R,
        (SegmentTag::Po1, 4) => DataType::R,
        (SegmentTag::Ack, 2) => DataType::R,
        (SegmentTag::Ack, 5) => DataType::Dt,
        (SegmentTag::Ctt, 1) => DataType::N0,
        (SegmentTag::Se, 1) => DataType::N0,
        _ => return None,
    };
    Some(dt)
}

/// Tier 2: keyword scan over the description.
///
/// Keyword order matters: "time" wins over "date" for "Date/Time
/// Qualifier"-style descriptions only because the scan runs in this
/// fixed sequence.
fn keyword_lookup(description: &str) -> Option<DataType> {
    let lower = description.to_lowercase();
    if lower.contains("time") {
        return Some(DataType::Tm);
    }
    if lower.contains("id") || lower.contains("identifier") || lower.contains("number") {
        return Some(DataType::Id);
    }
    if lower.contains("date") {
        return Some(DataType::Dt);
    }
    if lower.contains("quantity") || lower.contains("price") || lower.contains("amount") {
        return Some(DataType::R);
    }
    if lower.contains("code") || lower.contains("qualifier") {
        return Some(DataType::Id);
    }
    None
}

/// Tier 3: per-tag positional default.
fn tag_default(tag: SegmentTag) -> DataType {
    match tag {
        SegmentTag::Dtm => DataType::Dt,
        SegmentTag::Ctt | SegmentTag::Se | SegmentTag::Ge | SegmentTag::Iea => DataType::N0,
        SegmentTag::St | SegmentTag::Bak | SegmentTag::Ack => DataType::Id,
        SegmentTag::Isa | SegmentTag::Gs | SegmentTag::Ref | SegmentTag::N1 | SegmentTag::Po1 => {
            DataType::An
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_table_wins() {
        // ISA10 is "Interchange Time"; the exact tier answers before keywords
        assert_eq!(
            DataType::resolve(SegmentTag::Isa, 10, "Interchange Time"),
            DataType::Tm
        );
        // PO102 "Quantity Ordered" is tabled as R
        assert_eq!(
            DataType::resolve(SegmentTag::Po1, 2, "Quantity Ordered"),
            DataType::R
        );
    }

    #[test]
    fn test_keyword_tier() {
        // ISA06 is not in the exact table; "ID" keyword applies
        assert_eq!(
            DataType::resolve(SegmentTag::Isa, 6, "Interchange Sender ID"),
            DataType::Id
        );
        assert_eq!(
            DataType::resolve(SegmentTag::Po1, 3, "Unit or Basis for Measurement Code"),
            DataType::Id
        );
    }

    #[test]
    fn test_keyword_order_time_before_date() {
        assert_eq!(
            DataType::resolve(SegmentTag::Ack, 4, "Date/Time Qualifier"),
            DataType::Tm
        );
    }

    #[test]
    fn test_tag_default_tier() {
        // Generic fallback description carries none of the keywords that
        // would shortcut the scan, except "Element" which matches nothing
        assert_eq!(
            DataType::resolve(SegmentTag::Ref, 3, "REF 3"),
            DataType::An
        );
        assert_eq!(DataType::resolve(SegmentTag::Dtm, 9, "DTM 9"), DataType::Dt);
    }

    #[test]
    fn test_isa_authorization_information() {
        // "Authorization Information" carries no keyword; ISA defaults to AN
        assert_eq!(
            DataType::resolve(SegmentTag::Isa, 2, "Authorization Information"),
            DataType::An
        );
    }
}
