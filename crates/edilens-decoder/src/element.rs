//! Flat element decode - positional elements with semantic labels

use edilens_domain::{vocabulary, DataType, SegmentTag};
use serde::Serialize;

/// Placeholder recorded for a present-but-blank element value.
///
/// Distinguishes "field present but blank" from "field absent" in
/// rendered output.
pub const EMPTY_PLACEHOLDER: &str = "(empty)";

/// One positional field within one segment occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// 1-based line number over the raw transaction lines
    pub line_number: usize,

    /// The segment's leading tag
    pub segment_tag: String,

    /// Human position label: "Segment ID" for position 0, else `{tag}{nn}`
    pub element_position: String,

    /// `{tag}{nn}`, or the bare tag for position 0
    pub element_code: String,

    /// Literal value, or the `(empty)` placeholder when blank
    pub element_value: String,

    /// 2-3 character data-type code (ID, AN, DT, TM, R, N0)
    pub data_type: String,

    /// Human description of the element
    pub element_description: String,
}

/// Decode transaction text into a flat, ordered element list.
///
/// Lines without a `~` terminator or a `*` separator are ignored as
/// non-segment text. Trailing terminators are stripped before splitting.
pub fn decode_elements(edi_text: &str) -> Vec<Element> {
    let mut parsed = Vec::new();

    for (line_number, raw_line) in edi_text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || !line.contains('~') {
            continue;
        }

        let segment_data = line.trim_end_matches('~');
        if !segment_data.contains('*') {
            continue;
        }

        let elements: Vec<&str> = segment_data.split('*').collect();
        let segment_tag = elements[0];

        for (position, value) in elements.iter().enumerate() {
            parsed.push(build_element(line_number + 1, segment_tag, position, value));
        }
    }

    parsed
}

fn build_element(line_number: usize, segment_tag: &str, position: usize, value: &str) -> Element {
    if position == 0 {
        return Element {
            line_number,
            segment_tag: segment_tag.to_string(),
            element_position: "Segment ID".to_string(),
            element_code: segment_tag.to_string(),
            element_value: value.to_string(),
            data_type: DataType::Id.as_str().to_string(),
            element_description: format!("{} - Segment Identifier", segment_tag),
        };
    }

    let element_code = format!("{}{:02}", segment_tag, position);
    let (description, data_type) = match SegmentTag::parse(segment_tag) {
        Some(tag) => {
            let description = vocabulary::element_description(tag, position);
            let data_type = DataType::resolve(tag, position, &description);
            (description, data_type)
        }
        // Unknown tags still decode flat, with generic labels
        None => (format!("{} Element {}", segment_tag, position), DataType::An),
    };

    Element {
        line_number,
        segment_tag: segment_tag.to_string(),
        element_position: element_code.clone(),
        element_code,
        element_value: if value.is_empty() {
            EMPTY_PLACEHOLDER.to_string()
        } else {
            value.to_string()
        },
        data_type: data_type.as_str().to_string(),
        element_description: description,
    }
}

/// Collect the segment tags present in transaction text, in order of
/// first appearance, de-duplicated.
///
/// Derived simply as the first `*`-separated token of each non-blank,
/// separator-containing line.
pub fn present_tags(edi_text: &str) -> Vec<String> {
    let mut tags = Vec::new();

    for raw_line in edi_text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || !line.contains('*') {
            continue;
        }
        let tag = line.split('*').next().unwrap_or_default();
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    tags
}
