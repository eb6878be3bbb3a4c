//! Structured transaction decode - per-tag positional parsers
//!
//! Each segment type has a fixed-arity parser that reads elements by
//! 1-based index and substitutes the empty string for any missing index;
//! short segments never error. Trailer segments (SE, GE, IEA) merge
//! their fields into the objects opened by ST, GS and ISA rather than
//! replacing them.

use edilens_domain::SegmentTag;
use serde::Serialize;

/// Interchange envelope, built from ISA and IEA occurrences.
///
/// Field naming follows the trading-partner sample layout this decoder
/// was built against: the `01`-qualified identifier in ISA08 is the
/// sender, the `ZZ`-qualified identifier in ISA06 the receiver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Interchange {
    /// ISA01 - Authorization Information Qualifier
    pub authorization_qualifier: String,
    /// ISA02 - Authorization Information
    pub authorization_information: String,
    /// ISA03 - Security Information Qualifier
    pub security_qualifier: String,
    /// ISA04 - Security Information
    pub security_information: String,
    /// ISA05 - Interchange ID Qualifier
    pub sender_qualifier: String,
    /// ISA06 - Interchange ID
    pub receiver_id: String,
    /// ISA07 - Interchange ID Qualifier
    pub receiver_qualifier: String,
    /// ISA08 - Interchange ID
    pub sender_id: String,
    /// ISA09 - Interchange Date
    pub date: String,
    /// ISA10 - Interchange Time
    pub time: String,
    /// ISA11 - Interchange Control Standards Identifier
    pub standards_id: String,
    /// ISA12 - Interchange Control Version Number
    pub version: String,
    /// ISA13 / IEA02 - Interchange Control Number
    pub control_number: String,
    /// ISA14 - Acknowledgment Requested
    pub ack_requested: String,
    /// ISA15 - Usage Indicator
    pub usage_indicator: String,
    /// ISA16 - Component Element Separator
    pub component_separator: String,
    /// IEA01 - Number of Included Functional Groups
    pub functional_group_count: String,
}

/// Functional group envelope, built from GS and GE occurrences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FunctionalGroup {
    /// GS01 - Functional Identifier Code
    pub functional_id_code: String,
    /// GS02 - Application Sender's Code
    pub sender_code: String,
    /// GS03 - Application Receiver's Code
    pub receiver_code: String,
    /// GS04 - Date
    pub date: String,
    /// GS05 - Time
    pub time: String,
    /// GS06 / GE02 - Group Control Number
    pub group_control_number: String,
    /// GS07 - Responsible Agency Code
    pub agency_code: String,
    /// GS08 - Version / Release / Industry Identifier Code
    pub version: String,
    /// GE01 - Number of Transaction Sets Included
    pub transaction_set_count: String,
}

/// Transaction set, built from ST, BAK and SE occurrences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransactionSet {
    /// ST01 - Transaction Set Identifier Code
    pub transaction_set_id: String,
    /// ST02 / SE02 - Transaction Set Control Number
    pub control_number: String,
    /// BAK01 - Transaction Set Purpose Code
    pub purpose_code: String,
    /// BAK02 - Acknowledgment Type
    pub acknowledgment_type: String,
    /// BAK03 - Purchase Order Number
    pub purchase_order_number: String,
    /// BAK04 - Date
    pub date: String,
    /// SE01 - Number of Included Segments
    pub segment_count: String,
}

/// One line item acknowledgment (ACK segment).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Acknowledgment {
    /// ACK01 - Line Item Status Code
    pub status_code: String,
    /// Human-readable mapping of the status code
    pub status_description: String,
    /// ACK02 - Quantity
    pub quantity: String,
    /// ACK03 - Unit or Basis for Measurement Code
    pub unit_of_measure: String,
    /// ACK04 - Date/Time Qualifier
    pub date_qualifier: String,
    /// ACK05 - Date
    pub date: String,
    /// ACK06 - Request Reference Number
    pub request_reference_number: String,
}

/// One baseline item (PO1 segment).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// PO101 - Assigned Identification
    pub assigned_identification: String,
    /// PO102 - Quantity Ordered
    pub quantity_ordered: String,
    /// PO103 - Unit or Basis for Measurement Code
    pub unit_of_measure: String,
    /// PO104 - Unit Price
    pub unit_price: String,
    /// PO105 - Basis of Unit Price Code
    pub basis_of_unit_price: String,
    /// PO106 - Product/Service ID Qualifier
    pub product_service_id_qualifier_1: String,
    /// PO107 - Product/Service ID
    pub product_service_id_1: String,
    /// PO108 - Product/Service ID Qualifier
    pub product_service_id_qualifier_2: String,
    /// PO109 - Product/Service ID
    pub product_service_id_2: String,
    /// PO110 - Product/Service ID Qualifier
    pub product_service_id_qualifier_3: String,
    /// PO111 - Product/Service ID
    pub product_service_id_3: String,
    /// Derived: value qualified `UP` or `P`
    pub product_id: String,
    /// Derived: value qualified `VP`
    pub seller_part_number: String,
    /// Derived: value qualified `BP`
    pub buyer_part_number: String,
}

/// Transaction totals (CTT segment).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// CTT01 - Number of Line Items
    pub number_of_line_items: String,
}

/// One segment occurrence as it appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawSegment {
    /// The leading tag, known or not
    pub tag: String,
    /// The raw line, terminator stripped
    pub raw: String,
    /// The `*`-split element array, tag included at index 0
    pub elements: Vec<String>,
}

/// Normalized transaction built from one decoded payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransactionObject {
    /// Interchange envelope (ISA/IEA)
    pub interchange: Interchange,
    /// Functional group envelope (GS/GE)
    pub functional_group: FunctionalGroup,
    /// Transaction set (ST/BAK/SE)
    pub transaction_set: TransactionSet,
    /// Line item acknowledgments, in input order
    pub acknowledgments: Vec<Acknowledgment>,
    /// Baseline items, in input order
    pub line_items: Vec<LineItem>,
    /// Transaction totals (CTT)
    pub summary: Summary,
    /// Every segment occurrence, in input order, unknown tags included
    pub raw_segments: Vec<RawSegment>,
}

/// Decode transaction text into a normalized transaction object.
pub fn decode_transaction(edi_text: &str) -> TransactionObject {
    let mut transaction = TransactionObject::default();

    for raw_line in edi_text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || !line.contains('~') {
            continue;
        }
        let segment_data = line.trim_end_matches('~');
        if !segment_data.contains('*') {
            continue;
        }

        let parts: Vec<&str> = segment_data.split('*').collect();
        let tag = parts[0];

        transaction.raw_segments.push(RawSegment {
            tag: tag.to_string(),
            raw: segment_data.to_string(),
            elements: parts.iter().map(|p| p.to_string()).collect(),
        });

        // Unknown tags stay in raw_segments only
        match SegmentTag::parse(tag) {
            Some(SegmentTag::Isa) => parse_isa(&mut transaction.interchange, &parts),
            Some(SegmentTag::Gs) => parse_gs(&mut transaction.functional_group, &parts),
            Some(SegmentTag::St) => parse_st(&mut transaction.transaction_set, &parts),
            Some(SegmentTag::Bak) => parse_bak(&mut transaction.transaction_set, &parts),
            Some(SegmentTag::Po1) => transaction.line_items.push(parse_po1(&parts)),
            Some(SegmentTag::Ack) => transaction.acknowledgments.push(parse_ack(&parts)),
            Some(SegmentTag::Ctt) => transaction.summary.number_of_line_items = elem(&parts, 1),
            Some(SegmentTag::Se) => parse_se(&mut transaction.transaction_set, &parts),
            Some(SegmentTag::Ge) => parse_ge(&mut transaction.functional_group, &parts),
            Some(SegmentTag::Iea) => parse_iea(&mut transaction.interchange, &parts),
            Some(SegmentTag::Ref) | Some(SegmentTag::Dtm) | Some(SegmentTag::N1) | None => {}
        }
    }

    transaction
}

/// Element access by 1-based index; missing positions read as empty.
fn elem(parts: &[&str], index: usize) -> String {
    parts.get(index).copied().unwrap_or("").to_string()
}

fn parse_isa(interchange: &mut Interchange, parts: &[&str]) {
    interchange.authorization_qualifier = elem(parts, 1);
    interchange.authorization_information = elem(parts, 2);
    interchange.security_qualifier = elem(parts, 3);
    interchange.security_information = elem(parts, 4);
    interchange.sender_qualifier = elem(parts, 5);
    interchange.receiver_id = elem(parts, 6);
    interchange.receiver_qualifier = elem(parts, 7);
    interchange.sender_id = elem(parts, 8);
    interchange.date = elem(parts, 9);
    interchange.time = elem(parts, 10);
    interchange.standards_id = elem(parts, 11);
    interchange.version = elem(parts, 12);
    interchange.control_number = elem(parts, 13);
    interchange.ack_requested = elem(parts, 14);
    interchange.usage_indicator = elem(parts, 15);
    interchange.component_separator = elem(parts, 16);
}

fn parse_iea(interchange: &mut Interchange, parts: &[&str]) {
    interchange.functional_group_count = elem(parts, 1);
    interchange.control_number = elem(parts, 2);
}

fn parse_gs(group: &mut FunctionalGroup, parts: &[&str]) {
    group.functional_id_code = elem(parts, 1);
    group.sender_code = elem(parts, 2);
    group.receiver_code = elem(parts, 3);
    group.date = elem(parts, 4);
    group.time = elem(parts, 5);
    group.group_control_number = elem(parts, 6);
    group.agency_code = elem(parts, 7);
    group.version = elem(parts, 8);
}

fn parse_ge(group: &mut FunctionalGroup, parts: &[&str]) {
    group.transaction_set_count = elem(parts, 1);
    group.group_control_number = elem(parts, 2);
}

fn parse_st(set: &mut TransactionSet, parts: &[&str]) {
    set.transaction_set_id = elem(parts, 1);
    set.control_number = elem(parts, 2);
}

fn parse_bak(set: &mut TransactionSet, parts: &[&str]) {
    set.purpose_code = elem(parts, 1);
    set.acknowledgment_type = elem(parts, 2);
    set.purchase_order_number = elem(parts, 3);
    set.date = elem(parts, 4);
}

fn parse_se(set: &mut TransactionSet, parts: &[&str]) {
    set.segment_count = elem(parts, 1);
    set.control_number = elem(parts, 2);
}

fn parse_ack(parts: &[&str]) -> Acknowledgment {
    let status_code = elem(parts, 1);
    Acknowledgment {
        status_description: ack_status_description(&status_code),
        status_code,
        quantity: elem(parts, 2),
        unit_of_measure: elem(parts, 3),
        date_qualifier: elem(parts, 4),
        date: elem(parts, 5),
        request_reference_number: elem(parts, 6),
    }
}

fn ack_status_description(code: &str) -> String {
    match code {
        "IA" => "Item Accepted".to_string(),
        "IB" => "Item Backordered".to_string(),
        "IC" => "Item Accepted-Changes Made".to_string(),
        "ID" => "Item Deleted".to_string(),
        "IR" => "Item Rejected".to_string(),
        other => format!("Unknown Status ({})", other),
    }
}

fn parse_po1(parts: &[&str]) -> LineItem {
    let mut item = LineItem {
        assigned_identification: elem(parts, 1),
        quantity_ordered: elem(parts, 2),
        unit_of_measure: elem(parts, 3),
        unit_price: elem(parts, 4),
        basis_of_unit_price: elem(parts, 5),
        product_service_id_qualifier_1: elem(parts, 6),
        product_service_id_1: elem(parts, 7),
        product_service_id_qualifier_2: elem(parts, 8),
        product_service_id_2: elem(parts, 9),
        product_service_id_qualifier_3: elem(parts, 10),
        product_service_id_3: elem(parts, 11),
        ..Default::default()
    };

    // Qualifier/value pairs from index 5, stepping by 2. A trailing
    // qualifier with no value reads the value as empty.
    let mut index = 5;
    while index < parts.len() {
        let qualifier = elem(parts, index);
        let value = elem(parts, index + 1);
        match qualifier.as_str() {
            "UP" | "P" if item.product_id.is_empty() => item.product_id = value,
            "VP" if item.seller_part_number.is_empty() => item.seller_part_number = value,
            "BP" if item.buyer_part_number.is_empty() => item.buyer_part_number = value,
            _ => {}
        }
        index += 2;
    }

    item
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISA_LINE: &str =
        "ISA*00*          *00*          *ZZ*111111111      *01*007911209*150129*2215*U*00401*000122406*0*P*>~";

    #[test]
    fn test_isa_round_trip_fields() {
        let transaction = decode_transaction(ISA_LINE);

        let interchange = &transaction.interchange;
        assert_eq!(interchange.sender_id, "007911209");
        assert_eq!(interchange.receiver_qualifier, "01");
        assert_eq!(interchange.date, "150129");
        assert_eq!(interchange.time, "2215");
        assert_eq!(interchange.control_number, "000122406");
        assert_eq!(interchange.usage_indicator, "P");
        assert_eq!(interchange.component_separator, ">");
    }

    #[test]
    fn test_iea_merges_into_interchange() {
        let text = format!("{}\nIEA*1*000122406~", ISA_LINE);
        let transaction = decode_transaction(&text);

        // ISA fields survive, IEA fields merge in
        assert_eq!(transaction.interchange.sender_id, "007911209");
        assert_eq!(transaction.interchange.functional_group_count, "1");
        assert_eq!(transaction.interchange.control_number, "000122406");
    }

    #[test]
    fn test_gs_and_ge_merge() {
        let text = "GS*PR*SENDER*RECEIVER*20150129*2215*122406*X*004010~\nGE*1*122406~";
        let transaction = decode_transaction(text);

        let group = &transaction.functional_group;
        assert_eq!(group.functional_id_code, "PR");
        assert_eq!(group.sender_code, "SENDER");
        assert_eq!(group.transaction_set_count, "1");
        assert_eq!(group.group_control_number, "122406");
    }

    #[test]
    fn test_st_bak_se_share_transaction_set() {
        let text = "ST*855*0001~\nBAK*00*AC*PO12345*20150129~\nSE*8*0001~";
        let transaction = decode_transaction(text);

        let set = &transaction.transaction_set;
        assert_eq!(set.transaction_set_id, "855");
        assert_eq!(set.purpose_code, "00");
        assert_eq!(set.acknowledgment_type, "AC");
        assert_eq!(set.purchase_order_number, "PO12345");
        assert_eq!(set.segment_count, "8");
        assert_eq!(set.control_number, "0001");
    }

    #[test]
    fn test_po1_qualifier_scan() {
        let text = "PO1*1*140*EA*20*UP*893647*VP*EXPI9301CTBLK*BP*999999999999~";
        let transaction = decode_transaction(text);

        let item = &transaction.line_items[0];
        assert_eq!(item.quantity_ordered, "140");
        assert_eq!(item.unit_of_measure, "EA");
        assert_eq!(item.unit_price, "20");
        assert_eq!(item.product_id, "893647");
        assert_eq!(item.seller_part_number, "EXPI9301CTBLK");
        assert_eq!(item.buyer_part_number, "999999999999");

        // Positional fields record what sits at PO106-PO111 verbatim,
        // independent of the derived qualifier scan.
        assert_eq!(item.product_service_id_qualifier_1, "893647");
        assert_eq!(item.product_service_id_1, "VP");
        assert_eq!(item.product_service_id_qualifier_2, "EXPI9301CTBLK");
        assert_eq!(item.product_service_id_2, "BP");
        assert_eq!(item.product_service_id_qualifier_3, "999999999999");
        assert_eq!(item.product_service_id_3, "");
    }

    #[test]
    fn test_po1_positional_id_pairs() {
        let text = "PO1*1*140*EA*20*PE*UP*893647*VP*EXPI9301CTBLK~";
        let transaction = decode_transaction(text);

        let item = &transaction.line_items[0];
        assert_eq!(item.basis_of_unit_price, "PE");
        assert_eq!(item.product_service_id_qualifier_1, "UP");
        assert_eq!(item.product_service_id_1, "893647");
        assert_eq!(item.product_service_id_qualifier_2, "VP");
        assert_eq!(item.product_service_id_2, "EXPI9301CTBLK");
        assert_eq!(item.product_service_id_qualifier_3, "");
        assert_eq!(item.product_service_id_3, "");
    }

    #[test]
    fn test_po1_first_match_per_category_wins() {
        let text = "PO1*1*1*EA*5*UP*first*P*second~";
        let transaction = decode_transaction(text);

        assert_eq!(transaction.line_items[0].product_id, "first");
    }

    #[test]
    fn test_po1_trailing_qualifier_without_value() {
        let text = "PO1*1*1*EA*5*UP~";
        let transaction = decode_transaction(text);

        assert_eq!(transaction.line_items[0].product_id, "");
    }

    #[test]
    fn test_ack_status_mapping() {
        let text = "ACK*IB*140*EA~\nACK*XX*1*EA~";
        let transaction = decode_transaction(text);

        assert_eq!(
            transaction.acknowledgments[0].status_description,
            "Item Backordered"
        );
        assert_eq!(
            transaction.acknowledgments[1].status_description,
            "Unknown Status (XX)"
        );
    }

    #[test]
    fn test_short_segments_never_error() {
        let text = "ISA*00~\nACK~\nPO1~\nSE~";
        let transaction = decode_transaction(text);

        assert_eq!(transaction.interchange.authorization_qualifier, "00");
        assert_eq!(transaction.interchange.sender_id, "");
        // ACK~ and PO1~ and SE~ carry no separator and are skipped entirely
        assert!(transaction.acknowledgments.is_empty());
        assert!(transaction.line_items.is_empty());
    }

    #[test]
    fn test_raw_segments_preserve_order_and_unknown_tags() {
        let text = "ST*855*0001~\nZZZ*x~\nCTT*1~";
        let transaction = decode_transaction(text);

        let tags: Vec<&str> = transaction
            .raw_segments
            .iter()
            .map(|s| s.tag.as_str())
            .collect();
        assert_eq!(tags, vec!["ST", "ZZZ", "CTT"]);
        assert_eq!(transaction.raw_segments[1].elements, vec!["ZZZ", "x"]);
        assert_eq!(transaction.summary.number_of_line_items, "1");
    }

    #[test]
    fn test_line_item_and_ack_order_preserved() {
        let text = "PO1*1*1*EA~\nACK*IA~\nPO1*2*2*EA~\nACK*IR~";
        let transaction = decode_transaction(text);

        assert_eq!(transaction.line_items[0].assigned_identification, "1");
        assert_eq!(transaction.line_items[1].assigned_identification, "2");
        assert_eq!(transaction.acknowledgments[0].status_code, "IA");
        assert_eq!(transaction.acknowledgments[1].status_code, "IR");
    }

    #[test]
    fn test_decode_is_idempotent() {
        let text = format!("{}\nST*855*0001~\nPO1*1*140*EA*20*UP*893647~", ISA_LINE);
        assert_eq!(decode_transaction(&text), decode_transaction(&text));
    }
}
