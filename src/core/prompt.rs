//! Fixed instruction template for the analysis model
//!
//! The wording is part of the service's observable behavior: the parser is
//! written against the JSON shape this prompt demands.

/// Model used for analysis
pub const ANALYSIS_MODEL: &str = "llama3-8b-8192";

/// Sampling temperature; low to keep the output shape stable
pub const ANALYSIS_TEMPERATURE: f32 = 0.1;

/// Completion token budget
pub const ANALYSIS_MAX_TOKENS: u32 = 2000;

/// System instruction sent with every analysis request
pub const SYSTEM_PROMPT: &str = r#"You are Overload, an AI static analysis engine for Python code.

Identify the following issues:
- Syntax bugs
- Runtime exceptions
- Logic flaws
- Security vulnerabilities
- Performance issues
- Bad practices

Return ONLY valid JSON in this exact format:
[
  {
    "type": "bug_type_name",
    "severity": "low|medium|high|critical",
    "line": null_or_line_number,
    "description": "Clear description of the issue",
    "fix": "Specific suggestion to fix the issue"
  }
]

Rules:
- Return empty array [] if no issues found
- Use null for line if issue spans multiple lines
- Be specific and actionable in descriptions
- Provide concrete fix suggestions
- Focus on real issues, not style preferences
"#;

/// Embed the user's code in the analysis instruction.
pub fn render_user_prompt(code: &str) -> String {
    format!(
        "Analyze this Python code for bugs and issues:\n\n```python\n{code}\n```\n\nReturn JSON only.\n"
    )
}
