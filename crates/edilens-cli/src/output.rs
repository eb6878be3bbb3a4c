//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use edilens_decoder::{Element, TransactionObject};
use edilens_extractor::{AnalysisResult, FilterReport};
use edilens_report::CrossRefRow;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an analysis run: requirement map plus run counters.
    pub fn format_analysis(&self, result: &AnalysisResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let requirements: serde_json::Map<String, serde_json::Value> = result
                    .requirements
                    .iter()
                    .map(|(tag, record)| {
                        (
                            tag.as_str().to_string(),
                            serde_json::json!({
                                "x12_requirement": record.x12_requirement.map(|r| r.as_str()),
                                "company_usage": record.company_usage.map(|u| u.as_str()),
                                "min_usage": record.min_usage,
                                "max_usage": record.max_usage,
                            }),
                        )
                    })
                    .collect();

                let value = serde_json::json!({
                    "requirements": requirements,
                    "filtered_line_count": result.filtered_line_count,
                    "chunks_processed": result.chunks_processed,
                    "chunks_failed": result.chunks_failed,
                    "source_id": result.metadata.source_id,
                    "processing_time_ms": result.metadata.processing_time_ms,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                if result.requirements.is_empty() {
                    return Ok(self.colorize("No requirements extracted.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Segment", "X12 Requirement", "Company Usage", "Min", "Max"]);

                for (tag, record) in &result.requirements {
                    builder.push_record([
                        tag.as_str().to_string(),
                        record
                            .x12_requirement
                            .map(|r| r.as_str().to_string())
                            .unwrap_or_else(|| "unknown".to_string()),
                        record
                            .company_usage
                            .map(|u| u.as_str().to_string())
                            .unwrap_or_else(|| "unknown".to_string()),
                        record
                            .min_usage
                            .map(|n| n.to_string())
                            .unwrap_or_else(|| "N/A".to_string()),
                        record
                            .max_usage
                            .map(|n| n.to_string())
                            .unwrap_or_else(|| "N/A".to_string()),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                let footer = format!(
                    "{} filtered line(s), {} chunk(s) processed, {} failed",
                    result.filtered_line_count, result.chunks_processed, result.chunks_failed
                );
                Ok(format!("{}\n{}", table, self.info(&footer)))
            }
            OutputFormat::Quiet => {
                let tags: Vec<String> = result
                    .requirements
                    .keys()
                    .map(|t| t.as_str().to_string())
                    .collect();
                Ok(tags.join("\n"))
            }
        }
    }

    /// Format cross-reference rows.
    pub fn format_cross_reference(&self, rows: &[CrossRefRow]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
            OutputFormat::Table => {
                if rows.is_empty() {
                    return Ok(self.colorize("No segments to cross-reference.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record([
                    "Segment",
                    "X12 Requirement",
                    "Company Usage",
                    "Min",
                    "Max",
                    "Status",
                ]);

                for row in rows {
                    let status = if row.present_in_edi {
                        self.colorize(&row.status, "green")
                    } else {
                        self.colorize(&row.status, "red")
                    };
                    builder.push_record([
                        row.segment_tag.clone(),
                        row.x12_requirement.clone(),
                        row.company_usage.clone(),
                        row.min_usage.clone(),
                        row.max_usage.clone(),
                        status,
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
            OutputFormat::Quiet => {
                let lines: Vec<String> = rows
                    .iter()
                    .map(|r| format!("{} {}", r.segment_tag, r.status))
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a decoded transaction: element table plus normalized object.
    pub fn format_transaction(
        &self,
        elements: &[Element],
        transaction: &TransactionObject,
        present: &[String],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "transaction": transaction,
                    "elements": elements,
                    "present_tags": present,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                if elements.is_empty() {
                    return Ok(self.colorize("No segments decoded.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Line", "Segment", "Position", "Value", "Type", "Description"]);

                for element in elements {
                    builder.push_record([
                        element.line_number.to_string(),
                        element.segment_tag.clone(),
                        element.element_position.clone(),
                        element.element_value.clone(),
                        element.data_type.clone(),
                        element.element_description.clone(),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                let footer = format!(
                    "{} element(s) across segments: {}",
                    elements.len(),
                    present.join(", ")
                );
                Ok(format!("{}\n{}", table, self.info(&footer)))
            }
            OutputFormat::Quiet => Ok(present.join("\n")),
        }
    }

    /// Format a filter report.
    pub fn format_filter_report(&self, report: &FilterReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "total_lines": report.total_lines,
                    "filtered_lines": report.filtered_lines,
                    "tags_found": report.tags_found.iter().map(|t| t.as_str()).collect::<Vec<_>>(),
                    "tags_missing": report.tags_missing.iter().map(|t| t.as_str()).collect::<Vec<_>>(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut out = String::new();
                out.push_str(&self.info(&format!(
                    "{} of {} line(s) selected",
                    report.filtered_lines.len(),
                    report.total_lines
                )));
                out.push('\n');
                for line in &report.filtered_lines {
                    out.push_str(line);
                    out.push('\n');
                }
                let found: Vec<&str> = report.tags_found.iter().map(|t| t.as_str()).collect();
                let missing: Vec<&str> = report.tags_missing.iter().map(|t| t.as_str()).collect();
                out.push_str(&self.success(&format!("Tags found: {}", found.join(", "))));
                out.push('\n');
                out.push_str(&self.warning(&format!("Tags missing: {}", missing.join(", "))));
                Ok(out)
            }
            OutputFormat::Quiet => Ok(report.filtered_lines.join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edilens_extractor::AnalysisMetadata;

    fn sample_result() -> AnalysisResult {
        use edilens_domain::{CompanyUsage, RequirementRecord, SegmentTag, X12Requirement};
        let mut requirements = std::collections::BTreeMap::new();
        requirements.insert(
            SegmentTag::St,
            RequirementRecord {
                x12_requirement: Some(X12Requirement::Mandatory),
                company_usage: Some(CompanyUsage::MustUse),
                min_usage: Some(1),
                max_usage: Some(1),
            },
        );
        AnalysisResult {
            requirements,
            filtered_line_count: 3,
            chunks_processed: 1,
            chunks_failed: 0,
            metadata: AnalysisMetadata {
                source_id: "test".to_string(),
                timestamp: 0,
                processing_time_ms: 5,
            },
        }
    }

    #[test]
    fn test_analysis_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_analysis(&sample_result()).unwrap();
        assert!(output.contains("\"ST\""));
        assert!(output.contains("mandatory"));
        assert!(output.contains("filtered_line_count"));
    }

    #[test]
    fn test_analysis_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_analysis(&sample_result()).unwrap();
        assert!(output.contains("Segment"));
        assert!(output.contains("must_use"));
        assert!(output.contains("1 chunk(s) processed"));
    }

    #[test]
    fn test_analysis_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_analysis(&sample_result()).unwrap();
        assert_eq!(output, "ST");
    }

    #[test]
    fn test_transaction_quiet_lists_tags() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let edi = "ST*855*0001~\nCTT*1~";
        let elements = edilens_decoder::decode_elements(edi);
        let transaction = edilens_decoder::decode_transaction(edi);
        let present = edilens_decoder::present_tags(edi);

        let output = formatter
            .format_transaction(&elements, &transaction, &present)
            .unwrap();
        assert_eq!(output, "ST\nCTT");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
