//! Requirement records - per-segment requirement and usage evidence

use std::fmt;

/// The X12 standard's mandatory/optional designation for a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum X12Requirement {
    /// The standard requires this segment (`M`)
    Mandatory,
    /// The standard permits but does not require this segment (`O`)
    Optional,
}

impl X12Requirement {
    /// Wire string used in JSON payloads and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            X12Requirement::Mandatory => "mandatory",
            X12Requirement::Optional => "optional",
        }
    }

    /// Parse a wire string back into a requirement.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mandatory" => Some(X12Requirement::Mandatory),
            "optional" => Some(X12Requirement::Optional),
            _ => None,
        }
    }
}

impl fmt::Display for X12Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The trading-partner-specific usage overlay on top of the X12 requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyUsage {
    /// "Must Use"
    MustUse,
    /// "Used"
    Used,
    /// "May Use"
    Conditional,
    /// "Not Used"
    NotUsed,
}

impl CompanyUsage {
    /// Wire string used in JSON payloads and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyUsage::MustUse => "must_use",
            CompanyUsage::Used => "used",
            CompanyUsage::Conditional => "conditional",
            CompanyUsage::NotUsed => "not_used",
        }
    }

    /// Parse a wire string back into a usage.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "must_use" => Some(CompanyUsage::MustUse),
            "used" => Some(CompanyUsage::Used),
            "conditional" => Some(CompanyUsage::Conditional),
            "not_used" => Some(CompanyUsage::NotUsed),
            _ => None,
        }
    }
}

impl fmt::Display for CompanyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requirement evidence gathered for one segment tag.
///
/// Fields stay unset until some source supplies a value. Lower-priority
/// sources may only fill fields that are still unset; higher-priority
/// sources (the remote classifier) overwrite via their own merge path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementRecord {
    /// X12 requirement designation, if seen
    pub x12_requirement: Option<X12Requirement>,

    /// Company usage designation, if seen
    pub company_usage: Option<CompanyUsage>,

    /// Minimum usage count, if seen (from a `min/max` pattern)
    pub min_usage: Option<u32>,

    /// Maximum usage count, if seen (from a `min/max` pattern)
    pub max_usage: Option<u32>,
}

impl RequirementRecord {
    /// Fill any unset fields from `other`, keeping existing values.
    ///
    /// This is the first-write-wins merge used when the same tag appears
    /// across multiple specification lines.
    pub fn fill_missing(&mut self, other: &RequirementRecord) {
        if self.x12_requirement.is_none() {
            self.x12_requirement = other.x12_requirement;
        }
        if self.company_usage.is_none() {
            self.company_usage = other.company_usage;
        }
        if self.min_usage.is_none() {
            self.min_usage = other.min_usage;
        }
        if self.max_usage.is_none() {
            self.max_usage = other.max_usage;
        }
    }

    /// True when no field has been set yet.
    pub fn is_empty(&self) -> bool {
        self.x12_requirement.is_none()
            && self.company_usage.is_none()
            && self.min_usage.is_none()
            && self.max_usage.is_none()
    }
}
