//! Query command implementation.
//!
//! Addresses descriptor values with dot paths (`site.info.title`,
//! `nav[0].link`) and prints them as JSON.

use std::fs;
use std::io::Write;

use anyhow::{Result, bail};
use serde_json::{Map, Value as JsonValue};

use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::log;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let value = serde_json::to_value(config)?;

    let output = if args.paths.is_empty() {
        value
    } else if args.paths.len() == 1 {
        query_path(&value, &args.paths[0])?
    } else {
        // Multiple paths: object keyed by the requested path
        let mut obj = Map::new();
        for path in &args.paths {
            obj.insert(path.clone(), query_path(&value, path)?);
        }
        JsonValue::Object(obj)
    };

    let output = if args.filter_empty {
        filter_empty(output)
    } else {
        output
    };

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let output_path = crate::utils::path::expand_user_path(output_path);
        let mut file = fs::File::create(&output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Resolve one dot path against the descriptor JSON.
///
/// Segments address object keys; `[n]` suffixes index into arrays
/// (`nav[0].items[1].link`).
fn query_path(value: &JsonValue, path: &str) -> Result<JsonValue> {
    let mut current = value;

    for segment in path.split('.') {
        let (key, indexes) = parse_segment(segment)?;

        if !key.is_empty() {
            current = match current.get(key) {
                Some(v) => v,
                None => bail!("no field `{key}` in `{path}`"),
            };
        }

        for index in indexes {
            current = match current.get(index) {
                Some(v) => v,
                None => bail!("index {index} out of bounds in `{path}`"),
            };
        }
    }

    Ok(current.clone())
}

/// Split a path segment into its key and trailing `[n]` indexes.
fn parse_segment(segment: &str) -> Result<(&str, Vec<usize>)> {
    let Some(bracket) = segment.find('[') else {
        return Ok((segment, Vec::new()));
    };

    let key = &segment[..bracket];
    let mut indexes = Vec::new();

    for part in segment[bracket..].split('[').skip(1) {
        let Some(num) = part.strip_suffix(']') else {
            bail!("malformed index in `{segment}`");
        };
        indexes.push(num.parse()?);
    }

    Ok((key, indexes))
}

/// Recursively strip "empty" values (null, "", []) from the output.
fn filter_empty(value: JsonValue) -> JsonValue {
    match value {
        JsonValue::Object(obj) => JsonValue::Object(
            obj.into_iter()
                .map(|(k, v)| (k, filter_empty(v)))
                .filter(|(_, v)| !is_empty_value(v))
                .collect(),
        ),
        JsonValue::Array(arr) => {
            JsonValue::Array(arr.into_iter().map(filter_empty).collect())
        }
        other => other,
    }
}

/// Check if a JSON value is considered "empty" (null, "", [], {})
fn is_empty_value(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(arr) => arr.is_empty(),
        JsonValue::Object(obj) => obj.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use serde_json::json;

    fn descriptor() -> JsonValue {
        let config = test_parse_config(
            r#"[[nav]]
text = "Guide"
link = "/guide/"

[[nav]]
text = "More"
items = [{ text = "Team", link = "/team/" }]"#,
        );
        serde_json::to_value(&config).unwrap()
    }

    #[test]
    fn test_query_nested_key() {
        let value = descriptor();
        let result = query_path(&value, "site.info.title").unwrap();
        assert_eq!(result, json!("Test"));
    }

    #[test]
    fn test_query_array_index() {
        let value = descriptor();
        let result = query_path(&value, "nav[0].link").unwrap();
        assert_eq!(result, json!("/guide/"));

        let result = query_path(&value, "nav[1].items[0].text").unwrap();
        assert_eq!(result, json!("Team"));
    }

    #[test]
    fn test_query_missing_field() {
        let value = descriptor();
        assert!(query_path(&value, "site.missing").is_err());
        assert!(query_path(&value, "nav[9].link").is_err());
    }

    #[test]
    fn test_parse_segment_malformed() {
        assert!(parse_segment("nav[0").is_err());
        assert!(parse_segment("nav[x]").is_err());
    }

    #[test]
    fn test_filter_empty() {
        let value = json!({
            "title": "Docs",
            "url": null,
            "tags": [],
            "nested": { "empty": "" }
        });
        let filtered = filter_empty(value);
        assert_eq!(filtered, json!({ "title": "Docs" }));
    }
}
