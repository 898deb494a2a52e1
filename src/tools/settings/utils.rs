use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::types::{FirstContentKind, PageSettings};

/// Left-hand side of the settings assignment, up to the start of the literal.
static ASSIGNMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"window\s*\.\s*lpSettings\s*=\s*").expect("valid settings regex")
});

/// Byte offsets where a settings literal could start.
pub(super) fn literal_offsets(html: &str) -> Vec<usize> {
    ASSIGNMENT_REGEX.find_iter(html).map(|m| m.end()).collect()
}

/// Parse exactly one JSON value at the start of `src`, ignoring whatever follows.
pub(super) fn parse_leading_object(src: &str) -> Result<Map<String, Value>, String> {
    if !src.starts_with('{') {
        return Err("literal is not an object".to_string());
    }
    let mut stream = serde_json::Deserializer::from_str(src).into_iter::<Value>();
    match stream.next() {
        Some(Ok(Value::Object(map))) => Ok(map),
        Some(Ok(_)) => Err("literal is not an object".to_string()),
        Some(Err(e)) => Err(e.to_string()),
        None => Err("empty literal".to_string()),
    }
}

/// Build settings from a raw JSON object, accepting loosely typed fields.
pub(super) fn settings_from_object(obj: &Map<String, Value>) -> PageSettings {
    PageSettings {
        first_content_url: string_field(obj, "firstImageUrl").filter(|s| !s.trim().is_empty()),
        first_content_kind: match string_field(obj, "firstPageContentType") {
            Some(kind) if !kind.trim().eq_ignore_ascii_case("image") => FirstContentKind::Other,
            _ => FirstContentKind::Image,
        },
        last_image_number: obj.get("lastPageNum").map(number_value).unwrap_or(0),
        insertions: insertions_field(obj.get("htmlInsertions")),
        company_url: string_field(obj, "companyInfoUrl"),
        privacy_url: string_field(obj, "privacyPolicyUrl"),
        law_url: string_field(obj, "sctLawUrl"),
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Non-negative integer from a number, float or numeric string; 0 otherwise.
pub(super) fn number_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && *f > 0.0)
            .map(|f| f as u64)
            .unwrap_or(0),
        _ => 0,
    }
}

fn insertions_field(value: Option<&Value>) -> BTreeMap<String, String> {
    let Some(Value::Object(map)) = value else {
        return BTreeMap::new();
    };
    map.iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect()
}
