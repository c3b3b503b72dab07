//! Admission checks for submitted code
//!
//! Every check runs before any model call is made: size, emptiness, Python
//! syntax, and a policy denylist. Checks short-circuit on the first failure.

use thiserror::Error;
use tree_sitter::{Node, Parser};

/// Substring patterns for constructs that are never sent to the model.
///
/// This is a coarse case-insensitive scan, not semantic analysis: it also
/// matches inside identifiers, string literals, and comments.
pub const DANGEROUS_PATTERNS: &[&str] = &[
    "import os",
    "import subprocess",
    "import sys",
    "__import__",
    "eval(",
    "exec(",
    "open(",
];

/// Reasons a piece of code is refused admission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Code exceeds the configured size ceiling
    #[error("Code too large. Maximum size: {max_size} characters")]
    TooLarge {
        /// The configured ceiling, in characters
        max_size: usize,
    },

    /// Code is empty or whitespace-only
    #[error("Code cannot be empty")]
    Empty,

    /// Code does not parse as Python
    #[error("Syntax error in code: {0}")]
    Syntax(String),

    /// Code contains a denylisted construct
    #[error("Potentially dangerous code detected: {0}")]
    DisallowedConstruct(&'static str),
}

impl ValidationError {
    /// Stable identifier for logs and metrics.
    pub fn error_type(&self) -> &'static str {
        match self {
            ValidationError::TooLarge { .. } => "too_large",
            ValidationError::Empty => "empty",
            ValidationError::Syntax(_) => "syntax_error",
            ValidationError::DisallowedConstruct(_) => "disallowed_construct",
        }
    }
}

/// Check whether `code` may be sent for analysis.
///
/// Pure and deterministic; no I/O. `max_size` is measured in characters.
pub fn validate_code(code: &str, max_size: usize) -> Result<(), ValidationError> {
    if code.chars().count() > max_size {
        return Err(ValidationError::TooLarge { max_size });
    }

    if code.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    check_python_syntax(code)?;

    let lowered = code.to_lowercase();
    for pattern in DANGEROUS_PATTERNS {
        if lowered.contains(pattern) {
            return Err(ValidationError::DisallowedConstruct(pattern));
        }
    }

    Ok(())
}

/// Parse `code` with the tree-sitter Python grammar and reject trees that
/// contain error or missing nodes.
fn check_python_syntax(code: &str) -> Result<(), ValidationError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|err| ValidationError::Syntax(format!("grammar failed to load: {err}")))?;

    let tree = parser
        .parse(code, None)
        .ok_or_else(|| ValidationError::Syntax("parser produced no tree".to_string()))?;

    let root = tree.root_node();
    if !root.has_error() {
        return Ok(());
    }

    let offending = first_error_node(root).unwrap_or(root);
    let position = offending.start_position();
    Err(ValidationError::Syntax(format!(
        "invalid syntax at line {}, column {}",
        position.row + 1,
        position.column + 1
    )))
}

/// Depth-first search for the first error or missing node.
fn first_error_node(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    for child in children {
        if let Some(found) = first_error_node(child) {
            return Some(found);
        }
    }

    // has_error() was set but no child carries it; blame this node
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_SNIPPET: &str = "def add(a, b):\n    return a + b\n";

    #[test]
    fn test_valid_code_is_admissible() {
        assert!(validate_code(VALID_SNIPPET, 50_000).is_ok());
    }

    #[test]
    fn test_oversized_code_rejected() {
        let code = "x = 1\n".repeat(100);
        let err = validate_code(&code, 10).unwrap_err();
        assert_eq!(err, ValidationError::TooLarge { max_size: 10 });
        assert_eq!(
            err.to_string(),
            "Code too large. Maximum size: 10 characters"
        );
    }

    #[test]
    fn test_size_is_measured_in_characters() {
        // Four characters, twelve bytes
        let code = "s='é漢字'";
        assert!(code.len() > code.chars().count());
        assert!(validate_code(code, code.chars().count()).is_ok());
    }

    #[test]
    fn test_empty_code_rejected() {
        assert_eq!(validate_code("", 100).unwrap_err(), ValidationError::Empty);
        assert_eq!(
            validate_code("   \n\t  ", 100).unwrap_err(),
            ValidationError::Empty
        );
    }

    #[test]
    fn test_size_check_runs_before_emptiness() {
        let blanks = " ".repeat(50);
        let err = validate_code(&blanks, 10).unwrap_err();
        assert_eq!(err, ValidationError::TooLarge { max_size: 10 });
    }

    #[test]
    fn test_broken_syntax_rejected() {
        let err = validate_code("def broken(:\n    return 1\n", 50_000).unwrap_err();
        match err {
            ValidationError::Syntax(msg) => assert!(msg.contains("line")),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_expression_rejected() {
        let err = validate_code("x = (1 +\n", 50_000).unwrap_err();
        assert_eq!(err.error_type(), "syntax_error");
    }

    #[test]
    fn test_denylisted_import_rejected() {
        let err = validate_code("import os\nprint(os.getcwd())\n", 50_000).unwrap_err();
        assert_eq!(err, ValidationError::DisallowedConstruct("import os"));
        assert_eq!(
            err.to_string(),
            "Potentially dangerous code detected: import os"
        );
    }

    #[test]
    fn test_denylist_is_case_insensitive() {
        let err = validate_code("result = EVAL(source)\n", 50_000).unwrap_err();
        assert_eq!(err, ValidationError::DisallowedConstruct("eval("));

        let err = validate_code("banner = 'please Import OS carefully'\n", 50_000).unwrap_err();
        assert_eq!(err, ValidationError::DisallowedConstruct("import os"));
    }

    #[test]
    fn test_denylist_first_match_wins() {
        let code = "import subprocess\nexec(payload)\n";
        let err = validate_code(code, 50_000).unwrap_err();
        assert_eq!(err, ValidationError::DisallowedConstruct("import subprocess"));
    }

    #[test]
    fn test_denylist_matches_inside_identifiers() {
        // Known limitation of the coarse substring scan: "my_eval(" contains
        // "eval(" even though nothing dangerous is called.
        let err = validate_code("def check(x):\n    return my_eval(x)\n", 50_000).unwrap_err();
        assert_eq!(err, ValidationError::DisallowedConstruct("eval("));
    }

    #[test]
    fn test_denylist_matches_inside_comments() {
        let err = validate_code("# never import os here\nx = 1\n", 50_000).unwrap_err();
        assert_eq!(err, ValidationError::DisallowedConstruct("import os"));
    }

    #[test]
    fn test_clean_code_passes_denylist() {
        let code = "import json\n\ndef load(raw):\n    return json.loads(raw)\n";
        assert!(validate_code(code, 50_000).is_ok());
    }

    #[test]
    fn test_error_types_are_stable() {
        assert_eq!(
            ValidationError::TooLarge { max_size: 1 }.error_type(),
            "too_large"
        );
        assert_eq!(ValidationError::Empty.error_type(), "empty");
        assert_eq!(
            ValidationError::Syntax(String::new()).error_type(),
            "syntax_error"
        );
        assert_eq!(
            ValidationError::DisallowedConstruct("eval(").error_type(),
            "disallowed_construct"
        );
    }
}
