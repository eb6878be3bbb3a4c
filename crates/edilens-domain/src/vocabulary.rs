//! Element description tables for the known segment tags.
//!
//! Positions are 1-based, matching X12 element addressing. Unknown
//! (tag, position) pairs fall back to a generic `"{tag} Element {n}"`
//! description so flat decoding never fails on short or unusual segments.

use crate::segment::SegmentTag;

/// Look up the human description for a segment element.
///
/// # Examples
///
/// ```
/// use edilens_domain::{vocabulary, SegmentTag};
///
/// assert_eq!(
///     vocabulary::element_description(SegmentTag::Isa, 6),
///     "Interchange Sender ID"
/// );
/// assert_eq!(
///     vocabulary::element_description(SegmentTag::Ref, 3),
///     "REF Element 3"
/// );
/// ```
pub fn element_description(tag: SegmentTag, position: usize) -> String {
    match known_description(tag, position) {
        Some(text) => text.to_string(),
        None => format!("{} Element {}", tag.as_str(), position),
    }
}

fn known_description(tag: SegmentTag, position: usize) -> Option<&'static str> {
    let text = match (tag, position) {
        (SegmentTag::Isa, 1) => "Authorization Information Qualifier",
        (SegmentTag::Isa, 2) => "Authorization Information",
        (SegmentTag::Isa, 3) => "Security Information Qualifier",
        (SegmentTag::Isa, 4) => "Security Information",
        (SegmentTag::Isa, 5) => "Interchange ID Qualifier",
        (SegmentTag::Isa, 6) => "Interchange Sender ID",
        (SegmentTag::Isa, 7) => "Interchange ID Qualifier",
        (SegmentTag::Isa, 8) => "Interchange Receiver ID",
        (SegmentTag::Isa, 9) => "Interchange Date",
        (SegmentTag::Isa, 10) => "Interchange Time",
        (SegmentTag::Isa, 11) => "Interchange Control Standards Identifier",
        (SegmentTag::Isa, 12) => "Interchange Control Version Number",
        (SegmentTag::Isa, 13) => "Interchange Control Number",
        (SegmentTag::Isa, 14) => "Acknowledgment Requested",
        (SegmentTag::Isa, 15) => "Usage Indicator",
        (SegmentTag::Isa, 16) => "Component Element Separator",

        (SegmentTag::Gs, 1) => "Functional Identifier Code",
        (SegmentTag::Gs, 2) => "Application Sender's Code",
        (SegmentTag::Gs, 3) => "Application Receiver's Code",
        (SegmentTag::Gs, 4) => "Date",
        (SegmentTag::Gs, 5) => "Time",
        (SegmentTag::Gs, 6) => "Group Control Number",
        (SegmentTag::Gs, 7) => "Responsible Agency Code",
        (SegmentTag::Gs, 8) => "Version / Release / Industry Identifier Code",

        (SegmentTag::St, 1) => "Transaction Set Identifier Code",
        (SegmentTag::St, 2) => "Transaction Set Control Number",

        (SegmentTag::Bak, 1) => "Transaction Set Purpose Code",
        (SegmentTag::Bak, 2) => "Acknowledgment Type",
        (SegmentTag::Bak, 3) => "Purchase Order Number",
        (SegmentTag::Bak, 4) => "Date",

        (SegmentTag::Po1, 1) => "Assigned Identification",
        (SegmentTag::Po1, 2) => "Quantity Ordered",
        (SegmentTag::Po1, 3) => "Unit or Basis for Measurement Code",
        (SegmentTag::Po1, 4) => "Unit Price",
        (SegmentTag::Po1, 5) => "Basis of Unit Price Code",
        (SegmentTag::Po1, 6) => "Product/Service ID Qualifier",
        (SegmentTag::Po1, 7) => "Product/Service ID",
        (SegmentTag::Po1, 8) => "Product/Service ID Qualifier",
        (SegmentTag::Po1, 9) => "Product/Service ID",
        (SegmentTag::Po1, 10) => "Product/Service ID Qualifier",
        (SegmentTag::Po1, 11) => "Product/Service ID",

        (SegmentTag::Ack, 1) => "Line Item Status Code",
        (SegmentTag::Ack, 2) => "Quantity",
        (SegmentTag::Ack, 3) => "Unit or Basis for Measurement Code",
        (SegmentTag::Ack, 4) => "Date/Time Qualifier",
        (SegmentTag::Ack, 5) => "Date",
        (SegmentTag::Ack, 6) => "Request Reference Number",
        (SegmentTag::Ack, 7) => "Product/Service ID Qualifier",
        (SegmentTag::Ack, 8) => "Product/Service ID",

        (SegmentTag::Ctt, 1) => "Number of Line Items",

        (SegmentTag::Se, 1) => "Number of Included Segments",
        (SegmentTag::Se, 2) => "Transaction Set Control Number",

        (SegmentTag::Ge, 1) => "Number of Transaction Sets Included",
        (SegmentTag::Ge, 2) => "Group Control Number",

        (SegmentTag::Iea, 1) => "Number of Included Functional Groups",
        (SegmentTag::Iea, 2) => "Interchange Control Number",

        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_descriptions() {
        assert_eq!(
            element_description(SegmentTag::Isa, 6),
            "Interchange Sender ID"
        );
        assert_eq!(element_description(SegmentTag::Ctt, 1), "Number of Line Items");
        assert_eq!(
            element_description(SegmentTag::Iea, 2),
            "Interchange Control Number"
        );
    }

    #[test]
    fn test_fallback_for_unknown_position() {
        assert_eq!(element_description(SegmentTag::Isa, 17), "ISA Element 17");
        assert_eq!(element_description(SegmentTag::St, 3), "ST Element 3");
    }

    #[test]
    fn test_fallback_for_untabled_tags() {
        // REF, DTM and N1 carry no fixed table
        assert_eq!(element_description(SegmentTag::Ref, 1), "REF Element 1");
        assert_eq!(element_description(SegmentTag::Dtm, 2), "DTM Element 2");
        assert_eq!(element_description(SegmentTag::N1, 1), "N1 Element 1");
    }
}
