//! Segment tag vocabulary - the fixed set of known X12 segment tags

use std::fmt;

/// A known X12 segment tag.
///
/// The variant order is the vocabulary order: interchange envelope first,
/// then transaction content, then trailers. Heuristic matching scans tags
/// in this order and takes the first hit, so the order is part of the
/// contract, not a cosmetic choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SegmentTag {
    /// Interchange Control Header
    Isa,
    /// Functional Group Header
    Gs,
    /// Transaction Set Header
    St,
    /// Beginning Segment for Purchase Order Acknowledgment
    Bak,
    /// Reference Identification
    Ref,
    /// Date/Time Reference
    Dtm,
    /// Party Identification
    N1,
    /// Baseline Item Data
    Po1,
    /// Line Item Acknowledgment
    Ack,
    /// Transaction Totals
    Ctt,
    /// Transaction Set Trailer
    Se,
    /// Functional Group Trailer
    Ge,
    /// Interchange Control Trailer
    Iea,
}

impl SegmentTag {
    /// All known tags in vocabulary order.
    pub const ALL: [SegmentTag; 13] = [
        SegmentTag::Isa,
        SegmentTag::Gs,
        SegmentTag::St,
        SegmentTag::Bak,
        SegmentTag::Ref,
        SegmentTag::Dtm,
        SegmentTag::N1,
        SegmentTag::Po1,
        SegmentTag::Ack,
        SegmentTag::Ctt,
        SegmentTag::Se,
        SegmentTag::Ge,
        SegmentTag::Iea,
    ];

    /// The canonical uppercase code for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentTag::Isa => "ISA",
            SegmentTag::Gs => "GS",
            SegmentTag::St => "ST",
            SegmentTag::Bak => "BAK",
            SegmentTag::Ref => "REF",
            SegmentTag::Dtm => "DTM",
            SegmentTag::N1 => "N1",
            SegmentTag::Po1 => "PO1",
            SegmentTag::Ack => "ACK",
            SegmentTag::Ctt => "CTT",
            SegmentTag::Se => "SE",
            SegmentTag::Ge => "GE",
            SegmentTag::Iea => "IEA",
        }
    }

    /// Parse a tag from its code, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use edilens_domain::SegmentTag;
    ///
    /// assert_eq!(SegmentTag::parse("po1"), Some(SegmentTag::Po1));
    /// assert_eq!(SegmentTag::parse("XYZ"), None);
    /// ```
    pub fn parse(code: &str) -> Option<Self> {
        let upper = code.trim().to_uppercase();
        Self::ALL.iter().copied().find(|t| t.as_str() == upper)
    }
}

impl fmt::Display for SegmentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_order() {
        assert_eq!(SegmentTag::ALL[0], SegmentTag::Isa);
        assert_eq!(SegmentTag::ALL[7], SegmentTag::Po1);
        assert_eq!(SegmentTag::ALL[12], SegmentTag::Iea);
        assert_eq!(SegmentTag::ALL.len(), 13);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(SegmentTag::parse("ISA"), Some(SegmentTag::Isa));
        assert_eq!(SegmentTag::parse("isa"), Some(SegmentTag::Isa));
        assert_eq!(SegmentTag::parse(" bak "), Some(SegmentTag::Bak));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(SegmentTag::parse("ZZZ"), None);
        assert_eq!(SegmentTag::parse(""), None);
    }

    #[test]
    fn test_display_matches_code() {
        for tag in SegmentTag::ALL {
            assert_eq!(tag.to_string(), tag.as_str());
        }
    }
}
