//! Front-matter parsing

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LoadError;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Raw front-matter data from a content file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub authors: Vec<String>,
    pub excerpt: Option<String>,
    pub hero: Option<String>,
    pub draft: bool,
    #[serde(rename = "timeToRead")]
    pub time_to_read: Option<u32>,

    /// Additional custom fields, in declaration order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), LoadError> {
        let content = content.trim_start();

        // Check for YAML front-matter (---)
        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        // Check for JSON front-matter (;;; or {"key":)
        if content.starts_with(";;;") || content.starts_with('{') {
            return Self::parse_json(content);
        }

        Err(LoadError::MalformedMetadata {
            reason: "missing front-matter block".to_string(),
        })
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str), LoadError> {
        // Everything after the opening marker line
        let after_open = match content[3..].find('\n') {
            Some(pos) => &content[3 + pos + 1..],
            None => "",
        };

        // Locate the closing marker, which must sit alone on its line
        let mut offset = 0;
        let mut block_len = None;
        for line in after_open.split_inclusive('\n') {
            if is_marker_line(line) {
                block_len = Some(offset);
                offset += line.len();
                break;
            }
            offset += line.len();
        }

        let block_len = match block_len {
            Some(len) => len,
            None => {
                return Err(LoadError::MalformedMetadata {
                    reason: "unterminated front-matter block".to_string(),
                })
            }
        };

        let yaml_content = &after_open[..block_len];
        let remaining = after_open[offset..].trim_start_matches(['\n', '\r']);

        // An empty block is well-formed; required-field checks come later
        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content).map_err(|e| {
            LoadError::MalformedMetadata {
                reason: e.to_string(),
            }
        })?;

        Ok((fm, remaining))
    }

    fn parse_json(content: &str) -> Result<(Self, &str), LoadError> {
        // JSON front-matter ends with ;;;
        if let Some(rest) = content.strip_prefix(";;;") {
            let end_pos = match rest.find(";;;") {
                Some(pos) => pos,
                None => {
                    return Err(LoadError::MalformedMetadata {
                        reason: "unterminated front-matter block".to_string(),
                    })
                }
            };

            let json_content = &rest[..end_pos];
            let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);

            let fm: FrontMatter = serde_json::from_str(json_content).map_err(|e| {
                LoadError::MalformedMetadata {
                    reason: e.to_string(),
                }
            })?;

            return Ok((fm, remaining));
        }

        // Bare JSON object at the start: find the matching closing brace
        let mut depth = 0;
        let mut end_pos = 0;
        for (i, c) in content.char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        end_pos = i + 1;
                        break;
                    }
                }
                _ => {}
            }
        }

        if end_pos == 0 {
            return Err(LoadError::MalformedMetadata {
                reason: "unterminated front-matter block".to_string(),
            });
        }

        let json_content = &content[..end_pos];
        let remaining = content[end_pos..].trim_start_matches(['\n', '\r']);

        let fm: FrontMatter = serde_json::from_str(json_content).map_err(|e| {
            LoadError::MalformedMetadata {
                reason: e.to_string(),
            }
        })?;

        Ok((fm, remaining))
    }

    /// Parse the date string into a calendar date
    pub fn parse_date(&self) -> Option<NaiveDate> {
        self.date.as_ref().and_then(|s| parse_date_string(s))
    }
}

/// A marker line is exactly `---`, allowing trailing whitespace
fn is_marker_line(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Parse a date string in various formats
fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // Try RFC 3339 / ISO 8601
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}
