use serde_json::{json, Map, Value};

/// The `body` field of a provider document, or the document itself
pub fn body(raw: &Value) -> &Value {
    raw.get("body").unwrap_or(raw)
}

/// Pull a list out of a document whose body is either a list or a mapping holding `key`.
///
/// Plain strings (the teams endpoint sometimes returns bare codes) are lifted
/// into `{teamAbv, teamName}` objects.
pub fn normalize_list(raw: &Value, key: Option<&str>) -> Vec<Value> {
    let items = match (body(raw), key) {
        (Value::Array(items), _) => items.clone(),
        (Value::Object(map), Some(key)) => list_at(map, key),
        _ => Vec::new(),
    };

    if matches!(items.first(), Some(Value::String(_))) {
        return items
            .iter()
            .filter_map(Value::as_str)
            .map(|code| json!({"teamAbv": code, "teamName": code}))
            .collect();
    }
    items
}

/// First field among `keys` holding a non-empty string or a number
pub fn pick_str(obj: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match obj.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Lenient float: numbers, or strings like "12.5" and "+3"
pub fn to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_start_matches('+').parse().ok(),
        _ => None,
    }
}

/// Objects of a collection that may be shaped as a list or as a mapping of id -> object
pub fn objects_of(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().filter(|v| v.is_object()).collect(),
        Value::Object(map) => map.values().filter(|v| v.is_object()).collect(),
        _ => Vec::new(),
    }
}

fn list_at(map: &Map<String, Value>, key: &str) -> Vec<Value> {
    map.get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_list_reads_keyed_body() {
        let raw = json!({"body": {"adpList": [{"longName": "A"}]}});
        assert_eq!(normalize_list(&raw, Some("adpList")).len(), 1);
        assert!(normalize_list(&raw, Some("teams")).is_empty());
    }

    #[test]
    fn test_normalize_list_lifts_bare_codes() {
        let raw = json!({"body": ["BUF", "MIA"]});
        let teams = normalize_list(&raw, Some("teams"));
        assert_eq!(teams[1]["teamAbv"], "MIA");
        assert_eq!(teams[1]["teamName"], "MIA");
    }

    #[test]
    fn test_pick_str_skips_blank_fields() {
        let game = json!({"home": "", "homeTeam": null, "homeTeamAbv": "KC"});
        assert_eq!(
            pick_str(&game, &["home", "homeTeam", "homeTeamAbv"]),
            Some("KC".to_string())
        );
        assert_eq!(pick_str(&game, &["away"]), None);
    }

    #[test]
    fn test_to_float_is_lenient() {
        assert_eq!(to_float(&json!("+3.5")), Some(3.5));
        assert_eq!(to_float(&json!(-110)), Some(-110.0));
        assert_eq!(to_float(&json!("n/a")), None);
        assert_eq!(to_float(&Value::Null), None);
    }
}
