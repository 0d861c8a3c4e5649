//! Reading drafts and profiles from JSON files.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;

/// Read a JSON document of type `T` from `path`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))
}

/// A `field=value` assignment given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub field: String,
    pub value: String,
}

/// Parse `field=value`. The value may be empty and may itself contain `=`.
pub fn parse_assignment(raw: &str) -> Result<Assignment> {
    let Some((field, value)) = raw.split_once('=') else {
        bail!("expected FIELD=VALUE, got '{raw}'");
    };
    let field = field.trim();
    if field.is_empty() {
        bail!("missing field name in '{raw}'");
    }
    Ok(Assignment {
        field: field.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("title=Staff = Engineer").unwrap(),
            Assignment {
                field: "title".into(),
                value: "Staff = Engineer".into()
            }
        );
        assert_eq!(parse_assignment("company=").unwrap().value, "");
        assert!(parse_assignment("title").is_err());
        assert!(parse_assignment("=x").is_err());
    }
}
