//! Prompt construction for chunk classification requests

/// Builds the prompt pair for one chunk of specification lines
pub struct ClassifyPrompt {
    lines: Vec<String>,
}

impl ClassifyPrompt {
    /// Create a prompt builder for one chunk
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// The fixed system prompt sent with every chunk
    pub fn system_prompt(&self) -> &'static str {
        SYSTEM_PROMPT
    }

    /// Build the user prompt embedding the chunk lines and the required
    /// output JSON shape
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(CLASSIFY_INSTRUCTIONS);
        prompt.push_str("\n\nLines to analyze:\n");
        prompt.push_str(&self.lines.join("\n"));
        prompt.push('\n');

        prompt
    }
}

const SYSTEM_PROMPT: &str = "You are an EDI 855 specification expert. \
Analyze the provided lines and extract segment information. \
ALWAYS return ONLY valid JSON, no markdown, no explanations.";

const CLASSIFY_INSTRUCTIONS: &str = r#"Analyze these EDI specification lines and return a JSON response in this exact format:
{
  "segment_tag": {
    "x12_requirement": "mandatory" or "optional",
    "company_usage": "must_use" or "used" or "conditional" or "not_used",
    "min_usage": number,
    "max_usage": number
  }
}

IMPORTANT: Return ONLY valid JSON. No markdown, no code blocks, no explanations.

Rules:
- If line contains " M " then x12_requirement is "mandatory"
- If line contains " O " then x12_requirement is "optional"
- Map company usage: "Must Use" -> "must_use", "Used" -> "used", "May Use" -> "conditional", "Not Used" -> "not_used"
- Extract min/max usage numbers if present (e.g., "1/1" means min=1, max=1)"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_lines() {
        let prompt = ClassifyPrompt::new(vec![
            "ST M 1/1 Must Use".to_string(),
            "BAK M 1/1 Used".to_string(),
        ])
        .build();

        assert!(prompt.contains("ST M 1/1 Must Use"));
        assert!(prompt.contains("BAK M 1/1 Used"));
    }

    #[test]
    fn test_prompt_includes_output_shape() {
        let prompt = ClassifyPrompt::new(vec!["ST M".to_string()]).build();

        assert!(prompt.contains("x12_requirement"));
        assert!(prompt.contains("company_usage"));
        assert!(prompt.contains("min_usage"));
        assert!(prompt.contains("max_usage"));
    }

    #[test]
    fn test_system_prompt_fixed() {
        let a = ClassifyPrompt::new(vec![]).system_prompt();
        let b = ClassifyPrompt::new(vec!["x".to_string()]).system_prompt();
        assert_eq!(a, b);
        assert!(a.contains("EDI 855"));
    }
}
