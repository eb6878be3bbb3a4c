//! Edilens EDI Decoder
//!
//! Deterministic decoding of delimited X12 transaction text.
//!
//! # Overview
//!
//! Transactions use `~` as segment terminator and `*` as element
//! separator. Two parallel decode passes run over the same input, both
//! preserving segment order:
//!
//! - **Flat element decode**: one [`Element`] per position per segment
//!   occurrence, with descriptions and data types attached from the
//!   domain vocabulary.
//! - **Structured decode**: per-tag positional parsers accumulate a
//!   normalized [`TransactionObject`].
//!
//! Decoding never fails on short segments: missing positions read as the
//! empty string, and unknown tags are skipped by the structured pass but
//! retained in the flat pass and the raw segment list.
//!
//! # Example
//!
//! ```
//! use edilens_decoder::{decode_elements, decode_transaction};
//!
//! let edi = "ST*855*0001~\nPO1*1*140*EA*20*UP*893647~";
//! let elements = decode_elements(edi);
//! assert_eq!(elements[0].element_position, "Segment ID");
//!
//! let transaction = decode_transaction(edi);
//! assert_eq!(transaction.line_items[0].product_id, "893647");
//! ```

#![warn(missing_docs)]

mod element;
mod transaction;

pub use element::{decode_elements, present_tags, Element, EMPTY_PLACEHOLDER};
pub use transaction::{
    decode_transaction, Acknowledgment, FunctionalGroup, Interchange, LineItem, RawSegment,
    Summary, TransactionObject, TransactionSet,
};
