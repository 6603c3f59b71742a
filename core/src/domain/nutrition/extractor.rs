use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::nutrition::{
    entities::{DEFAULT_SERVING, NutrientRecord},
    json_scan::{ends_inside_string, extract_balanced_object},
};

const SNIPPET_CHARS: usize = 100;

/// Appended to a truncated object so the fields usually cut off last still parse.
const REPAIR_TAIL: &str = r#" "carboidratos":0, "gorduras":0, "porcao":"1 porção""#;

static FENCE_OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[A-Za-z0-9_+-]*\s*").expect("fence opener regex is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("AI response does not contain valid JSON: {snippet}")]
    NoValidJson { snippet: String },

    #[error("AI response contains a malformed JSON object ({reason}): {snippet}")]
    MalformedObject { snippet: String, reason: String },
}

/// The raw response and the region selected by fence unwrapping.
struct Candidate<'a> {
    raw: &'a str,
    block: &'a str,
}

type Attempt = fn(&Candidate<'_>) -> Result<Option<NutrientRecord>, ExtractionError>;

const ATTEMPTS: [(&str, Attempt); 3] = [
    ("fenced_object", fenced_object),
    ("truncation_repair", truncation_repair),
    ("whole_text_object", whole_text_object),
];

/// Recovers a [`NutrientRecord`] from the text returned by the AI service.
///
/// The text may be wrapped in a markdown fence, surrounded by prose or cut off
/// before the object closes. Strategies run in order and the first one that
/// produces a record wins. Values are coerced but never rounded.
pub fn extract_nutrient_record(raw: &str) -> Result<NutrientRecord, ExtractionError> {
    let raw = raw.trim();
    let candidate = Candidate {
        raw,
        block: unwrap_fence(raw),
    };

    for (strategy, attempt) in ATTEMPTS {
        if let Some(record) = attempt(&candidate)? {
            debug!(strategy, "recovered nutrient record from AI response");
            return Ok(record);
        }
    }

    warn!(response = %snippet(raw), "no nutrient record found in AI response");
    Err(ExtractionError::NoValidJson {
        snippet: snippet(raw),
    })
}

/// Returns the content of the first fenced block, or the whole text when there is none.
///
/// The opener may carry a language tag. A missing closing fence means the
/// block runs to the end of the text.
pub fn unwrap_fence(raw: &str) -> &str {
    let raw = raw.trim();
    let Some(opener) = FENCE_OPENER.find(raw) else {
        return raw;
    };

    let body = &raw[opener.end()..];
    let body = match body.find("```") {
        Some(end) => &body[..end],
        None => body,
    };

    body.trim()
}

/// Patches an object cut off mid-stream so that it becomes parseable.
///
/// A trailing key without value gets `0`, an unterminated string gets closed
/// together with its object, and missing closing braces are added after the
/// default tail.
pub fn repair_truncated_json(text: &str) -> String {
    let mut repaired = text.trim().to_string();

    if repaired.ends_with(':') {
        repaired.push('0');
    }
    if ends_inside_string(&repaired) || repaired.ends_with(['"', '\'']) {
        repaired.push_str("\"}");
    }

    let opens = repaired.matches('{').count();
    let closes = repaired.matches('}').count();
    if opens > closes {
        if !repaired.ends_with('}') {
            if !repaired.ends_with(',') && !repaired.ends_with('{') {
                repaired.push(',');
            }
            repaired.push_str(REPAIR_TAIL);
        }
        repaired.push_str(&"}".repeat(opens - closes));
    }

    repaired
}

fn fenced_object(candidate: &Candidate<'_>) -> Result<Option<NutrientRecord>, ExtractionError> {
    let Some(object) = extract_balanced_object(candidate.block) else {
        return Ok(None);
    };

    let value = serde_json::from_str::<Value>(object).map_err(|e| {
        warn!("balanced object in AI response is not valid JSON: {}", e);
        ExtractionError::MalformedObject {
            snippet: snippet(object),
            reason: e.to_string(),
        }
    })?;

    Ok(Some(coerce_record(&value, None)))
}

fn truncation_repair(candidate: &Candidate<'_>) -> Result<Option<NutrientRecord>, ExtractionError> {
    let Some(start) = candidate.block.find('{') else {
        return Ok(None);
    };

    let repaired = repair_truncated_json(&candidate.block[start..]);
    match serde_json::from_str::<Value>(&repaired) {
        Ok(value) => Ok(Some(coerce_record(&value, Some(DEFAULT_SERVING)))),
        Err(e) => {
            debug!("truncation repair did not produce valid JSON: {}", e);
            Ok(None)
        }
    }
}

fn whole_text_object(candidate: &Candidate<'_>) -> Result<Option<NutrientRecord>, ExtractionError> {
    let record = extract_balanced_object(candidate.raw)
        .and_then(|object| serde_json::from_str::<Value>(object).ok())
        .map(|value| coerce_record(&value, None));

    Ok(record)
}

/// Reads the five known fields out of an untyped JSON value.
///
/// Numbers that are missing or not numeric become `0`. A missing serving
/// becomes `missing_serving`, or an empty string when none is given.
fn coerce_record(value: &Value, missing_serving: Option<&str>) -> NutrientRecord {
    let empty = Map::new();
    let fields = value.as_object().unwrap_or(&empty);

    NutrientRecord {
        calories: coerce_number(fields.get("calorias")),
        protein: coerce_number(fields.get("proteinas")),
        carbohydrates: coerce_number(fields.get("carboidratos")),
        fat: coerce_number(fields.get("gorduras")),
        serving: coerce_serving(fields.get("porcao"))
            .unwrap_or_else(|| missing_serving.unwrap_or_default().to_string()),
    }
}

fn coerce_number(value: Option<&Value>) -> f64 {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        _ => 0.0,
    };

    if number.is_finite() { number } else { 0.0 }
}

fn coerce_serving(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn snippet(text: &str) -> String {
    text.chars().take(SNIPPET_CHARS).collect()
}
