use serde_json::Value;

use super::values::to_float;

const NESTED_MODE_KEYS: [&str; 5] = ["PPR", "standard", "halfPPR", "HalfPPR", "Default"];
const FLAT_MODE_FIELDS: [&str; 3] = [
    "fantasyPointsPPR",
    "fantasyPointsHalfPPR",
    "fantasyPointsStandard",
];

/// Fantasy points from a projection object.
///
/// Priority: `fantasyPoints`, then `fantasyPointsDefault` (a per-mode mapping
/// checked for `mode_key` first, or a bare number), then the flat per-mode fields.
pub fn parse_points(obj: &Value, mode_key: &str) -> Option<f64> {
    if !obj.is_object() {
        return None;
    }

    if let Some(points) = obj.get("fantasyPoints").and_then(to_float) {
        return Some(points);
    }

    if let Some(points) = obj.get("fantasyPointsDefault").and_then(|d| default_points(d, mode_key)) {
        return Some(points);
    }

    FLAT_MODE_FIELDS
        .iter()
        .find_map(|field| obj.get(*field).and_then(to_float))
}

fn default_points(value: &Value, mode_key: &str) -> Option<f64> {
    match value {
        Value::Object(by_mode) => by_mode.get(mode_key).and_then(to_float).or_else(|| {
            NESTED_MODE_KEYS
                .iter()
                .find_map(|key| by_mode.get(*key).and_then(to_float))
        }),
        other => to_float(other),
    }
}
