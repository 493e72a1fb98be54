use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One ramp segment of a ramping scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub duration: String,
    pub target: u32,
}

impl Stage {
    /// Render as the `duration:target` pair passed to a `--stage` flag.
    pub fn flag_value(&self) -> String {
        format!("{}:{}", self.duration, self.target)
    }
}

/// Parse a stages definition from its raw JSON form.
///
/// Malformed JSON and non-array values are recovered as an empty list with a
/// warning; this is the only configuration fault that is not fatal. Entries
/// without a non-empty `duration` string or an integer-coercible `target` are
/// dropped silently.
pub fn parse_stages(raw: Option<&str>) -> Vec<Stage> {
    let value = raw.map(str::trim).unwrap_or("");
    if value.is_empty() {
        return Vec::new();
    }

    let parsed: Value = match serde_json::from_str(value) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("Ignoring malformed stages JSON {value:?}: {e}");
            return Vec::new();
        }
    };

    let Some(entries) = parsed.as_array() else {
        log::warn!(
            "Stages definition must be a JSON array of {{duration, target}} objects, got: {parsed}"
        );
        return Vec::new();
    };

    entries.iter().filter_map(parse_stage).collect()
}

fn parse_stage(entry: &Value) -> Option<Stage> {
    let duration = entry.get("duration")?.as_str()?.trim();
    if duration.is_empty() {
        return None;
    }
    let target = entry.get("target").and_then(coerce_target)?;
    Some(Stage {
        duration: duration.to_string(),
        target,
    })
}

fn coerce_target(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
