//! Normalization and merge of remote classification results
//!
//! Remote responses are heterogeneous: some arrive as plain JSON objects,
//! some wrapped under an envelope key, some as JSON-in-a-string with
//! fenced-code markers. Normalization runs those steps in a fixed order
//! and discards anything that still fails to parse; a chunk that yields
//! nothing simply contributes nothing.

use crate::types::RequirementMap;
use edilens_domain::{CompanyUsage, RequirementRecord, SegmentTag, X12Requirement};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Envelope keys a remote payload may be wrapped under, tried in order.
const ENVELOPE_KEYS: [&str; 3] = ["response", "data", "result"];

/// Outcome of one chunk's classification call
///
/// Missing data and malformed data are first-class states, not caught
/// exceptions: the merge step pattern-matches on this type.
#[derive(Debug, Clone)]
pub enum ChunkOutcome {
    /// The service answered and the body parsed as JSON
    Classified(Value),

    /// The call failed (network, timeout, non-2xx, unparseable body)
    Failed(String),
}

/// Merge remote chunk results over the local heuristic base.
///
/// Remote values take strict precedence: every non-null field in a
/// validated remote payload overwrites the merged record, and later
/// chunks win over earlier chunks for the same field. Tags unseen by the
/// local pass are inserted as new entries.
pub fn merge_remote_results(base: RequirementMap, outcomes: &[ChunkOutcome]) -> RequirementMap {
    let mut merged = base;

    for (idx, outcome) in outcomes.iter().enumerate() {
        let payload = match outcome {
            ChunkOutcome::Classified(value) => value,
            ChunkOutcome::Failed(reason) => {
                debug!("Skipping failed chunk {}: {}", idx, reason);
                continue;
            }
        };

        let Some(object) = normalize_payload(payload) else {
            debug!("Chunk {} payload did not normalize to an object", idx);
            continue;
        };

        for (key, data) in &object {
            let Some(data) = data.as_object() else {
                continue;
            };
            let Some(tag) = SegmentTag::parse(key) else {
                warn!("Remote chunk {} named unknown segment tag '{}'", idx, key);
                continue;
            };

            let record = merged.entry(tag).or_default();
            apply_remote_fields(record, data);
        }
    }

    merged
}

/// Normalize one remote payload into a segment-keyed JSON object.
///
/// Steps, in order: reject failure markers (`"error"` key), unwrap a
/// known envelope key, and parse string payloads as JSON after stripping
/// fenced-code markers. Any step that fails drops the chunk silently.
pub fn normalize_payload(payload: &Value) -> Option<Map<String, Value>> {
    if payload.get("error").is_some() {
        return None;
    }

    let mut inner = payload;
    if let Some(obj) = payload.as_object() {
        for key in ENVELOPE_KEYS {
            if let Some(wrapped) = obj.get(key) {
                inner = wrapped;
                break;
            }
        }
    }

    let parsed;
    let inner = if let Some(text) = inner.as_str() {
        parsed = serde_json::from_str::<Value>(strip_code_fences(text)).ok()?;
        &parsed
    } else {
        inner
    };

    inner.as_object().cloned()
}

/// Strip a leading/trailing fenced-code marker, if present.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim()
}

/// Overwrite record fields from a remote object, skipping nulls and
/// values that do not parse into the known field vocabularies.
fn apply_remote_fields(record: &mut RequirementRecord, data: &Map<String, Value>) {
    if let Some(value) = non_null_str(data, "x12_requirement") {
        match X12Requirement::parse(value) {
            Some(req) => record.x12_requirement = Some(req),
            None => warn!("Unrecognized x12_requirement '{}' from remote", value),
        }
    }

    if let Some(value) = non_null_str(data, "company_usage") {
        match CompanyUsage::parse(value) {
            Some(usage) => record.company_usage = Some(usage),
            None => warn!("Unrecognized company_usage '{}' from remote", value),
        }
    }

    if let Some(count) = non_null_count(data, "min_usage") {
        record.min_usage = Some(count);
    }
    if let Some(count) = non_null_count(data, "max_usage") {
        record.max_usage = Some(count);
    }
}

fn non_null_str<'a>(data: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    data.get(key).filter(|v| !v.is_null())?.as_str()
}

/// Counts arrive as JSON numbers or, from sloppier services, as strings.
fn non_null_count(data: &Map<String, Value>, key: &str) -> Option<u32> {
    let value = data.get(key).filter(|v| !v.is_null())?;
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    value.as_str()?.trim().parse().ok()
}
