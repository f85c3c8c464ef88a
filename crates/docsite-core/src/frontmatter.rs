//! Frontmatter parsing for documentation sources.

use std::{collections::HashMap, path::Path};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CoreError, Result};

/// Author-supplied metadata for a documentation page.
///
/// Every field is optional: a page without frontmatter and a page with an
/// empty block both produce `Frontmatter::default()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Page title.
    #[serde(default)]
    pub title: Option<String>,

    /// Page description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Publication date. A bare date such as `2022-03-01` means midnight UTC.
    #[serde(default, deserialize_with = "deserialize_date")]
    pub date: Option<DateTime<Utc>>,

    /// Fixed output path. When non-empty it bypasses path normalization.
    #[serde(default)]
    pub permalink: Option<String>,

    /// Any other keys, kept for themes and plugins.
    #[serde(default, flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// Delimiter types for frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// YAML frontmatter delimited by `---`.
    Yaml,
    /// TOML frontmatter delimited by `+++`.
    Toml,
}

impl FrontmatterFormat {
    /// Get the delimiter string for this format.
    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

impl Frontmatter {
    /// The permalink, if set to a non-empty value.
    pub fn permalink(&self) -> Option<&str> {
        self.permalink.as_deref().filter(|p| !p.is_empty())
    }
}

fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DateValue {
        DateTime(DateTime<Utc>),
        Date(NaiveDate),
    }

    Ok(
        Option::<DateValue>::deserialize(deserializer)?.map(|value| match value {
            DateValue::DateTime(datetime) => datetime,
            DateValue::Date(date) => date.and_time(NaiveTime::MIN).and_utc(),
        }),
    )
}

/// Split content into frontmatter and body.
///
/// Both delimiters must sit on a line of their own, so a value containing
/// `---` does not end the block.
pub fn split_frontmatter(content: &str) -> Option<(FrontmatterFormat, &str, &str)> {
    let content = content.trim_start();

    let format = if content.starts_with("---") {
        FrontmatterFormat::Yaml
    } else if content.starts_with("+++") {
        FrontmatterFormat::Toml
    } else {
        return None;
    };

    let delimiter = format.delimiter();

    let (opening_rest, block) = content[delimiter.len()..].split_once('\n')?;
    if !opening_rest.trim().is_empty() {
        return None;
    }

    let mut offset = 0;
    for line in block.split_inclusive('\n') {
        if line.trim_end() == delimiter {
            let frontmatter = block[..offset].trim();
            let body = block[offset + line.len()..].trim_start();
            return Some((format, frontmatter, body));
        }
        offset += line.len();
    }

    None
}

/// Parse frontmatter from a source document.
///
/// Returns `None` for documents without a frontmatter block, so callers can
/// tell "absent" apart from "present but empty".
pub fn parse_frontmatter(content: &str, path: &Path) -> Result<(Option<Frontmatter>, String)> {
    let Some((format, fm_str, body)) = split_frontmatter(content) else {
        return Ok((None, content.to_string()));
    };

    if fm_str.is_empty() {
        return Ok((Some(Frontmatter::default()), body.to_string()));
    }

    let frontmatter: Frontmatter = match format {
        FrontmatterFormat::Yaml => {
            serde_yaml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
        FrontmatterFormat::Toml => {
            toml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
    };

    Ok((Some(frontmatter), body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_yaml_frontmatter() {
        let content = r#"---
title: "Installation"
---

# Installation"#;

        let (format, fm, body) = split_frontmatter(content).expect("split");
        assert_eq!(format, FrontmatterFormat::Yaml);
        assert!(fm.contains("title:"));
        assert!(body.starts_with("# Installation"));
    }

    #[test]
    fn test_split_toml_frontmatter() {
        let content = r#"+++
title = "Installation"
+++

# Installation"#;

        let (format, fm, _body) = split_frontmatter(content).expect("split");
        assert_eq!(format, FrontmatterFormat::Toml);
        assert!(fm.contains("title ="));
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Terminalle\n\nA fancy drop-down terminal.";
        assert!(split_frontmatter(content).is_none());

        let (fm, body) = parse_frontmatter(content, Path::new("README.md")).expect("parse");
        assert!(fm.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_parse_yaml_permalink() {
        let content = r#"---
title: "Legacy"
permalink: /old/legacy.html
date: 2022-03-01T00:00:00Z
---

Moved."#;

        let (fm, body) = parse_frontmatter(content, Path::new("legacy.md")).expect("parse");
        let fm = fm.expect("frontmatter present");

        assert_eq!(fm.title.as_deref(), Some("Legacy"));
        assert_eq!(fm.permalink(), Some("/old/legacy.html"));
        assert!(fm.date.is_some());
        assert_eq!(body, "Moved.");
    }

    #[test]
    fn test_parse_toml_permalink() {
        let content = r#"+++
permalink = "/pinned/"
+++
Body"#;

        let (fm, _body) = parse_frontmatter(content, Path::new("pinned.md")).expect("parse");
        assert_eq!(fm.expect("frontmatter").permalink(), Some("/pinned/"));
    }

    #[test]
    fn test_empty_permalink_is_absent() {
        let content = "---\npermalink: \"\"\n---\nBody";

        let (fm, _body) = parse_frontmatter(content, Path::new("a.md")).expect("parse");
        let fm = fm.expect("frontmatter");
        assert_eq!(fm.permalink.as_deref(), Some(""));
        assert_eq!(fm.permalink(), None);
    }

    #[test]
    fn test_empty_block_is_default() {
        let content = "---\n---\nBody";

        let (fm, body) = parse_frontmatter(content, Path::new("a.md")).expect("parse");
        assert_eq!(fm, Some(Frontmatter::default()));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_delimiter_inside_value() {
        let content = "---\ntitle: before---after\npermalink: /pinned.html\n---\nBody";

        let (fm, body) = parse_frontmatter(content, Path::new("a.md")).expect("parse");
        let fm = fm.expect("frontmatter");
        assert_eq!(fm.title.as_deref(), Some("before---after"));
        assert_eq!(fm.permalink(), Some("/pinned.html"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_closing_delimiter_at_end_of_input() {
        let content = "+++\npermalink = \"/pinned/\"\n+++";

        let (format, fm, body) = split_frontmatter(content).expect("split");
        assert_eq!(format, FrontmatterFormat::Toml);
        assert_eq!(fm, "permalink = \"/pinned/\"");
        assert!(body.is_empty());
    }

    #[test]
    fn test_unclosed_block_is_not_frontmatter() {
        assert!(split_frontmatter("---\ntitle: a --- b\nBody").is_none());
        assert!(split_frontmatter("----\ntitle: a\n----\n").is_none());
    }

    #[test]
    fn test_parse_date_only() {
        let content = "---\ntitle: Install\ndate: 2022-03-01\n---\n# Install";

        let (fm, _body) = parse_frontmatter(content, Path::new("install.md")).expect("parse");
        let date = fm.expect("frontmatter").date.expect("date");
        assert_eq!(date.to_rfc3339(), "2022-03-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_date_with_offset() {
        let content = "---\ndate: 2022-03-01T10:00:00+02:00\n---\n";

        let (fm, _body) = parse_frontmatter(content, Path::new("a.md")).expect("parse");
        let date = fm.expect("frontmatter").date.expect("date");
        assert_eq!(date.to_rfc3339(), "2022-03-01T08:00:00+00:00");
    }

    #[test]
    fn test_extra_fields_preserved() {
        let content = "---\nsidebar: auto\n---\nBody";

        let (fm, _body) = parse_frontmatter(content, Path::new("a.md")).expect("parse");
        let fm = fm.expect("frontmatter");
        assert!(fm.extra.contains_key("sidebar"));
        assert!(fm.permalink().is_none());
    }

    #[test]
    fn test_invalid_yaml_reports_path() {
        let content = "---\ntitle: [unclosed\n---\nBody";

        let err = parse_frontmatter(content, Path::new("broken.md")).unwrap_err();
        assert!(err.to_string().contains("broken.md"));
    }
}
