use serde_json::Value;

use crate::model::node_output::Entity;

/// Decode a model reply into entities.
///
/// Accepts a bare JSON array or one wrapped in a markdown code fence. Items are
/// either `{"text": .., "label": ..}` objects or `[text, label]` pairs; anything
/// else is skipped.
pub fn decode_entities(raw: &str) -> Result<Vec<Entity>, String> {
    let body = strip_fence(raw);

    let value: Value = serde_json::from_str(body).map_err(|e| format!("Invalid entity output: {}", e))?;

    let Value::Array(items) = value else {
        return Err("entity output must be a JSON array".to_string());
    };

    let mut entities = Vec::new();
    for item in items {
        if let Some(entity) = decode_item(&item) {
            entities.push(entity);
        }
    }

    Ok(entities)
}

fn decode_item(item: &Value) -> Option<Entity> {
    let (text, label) = match item {
        Value::Object(map) => (map.get("text")?.as_str()?, map.get("label")?.as_str()?),
        Value::Array(pair) if pair.len() == 2 => (pair[0].as_str()?, pair[1].as_str()?),
        _ => return None,
    };

    let text = text.trim();
    let label = label.trim();
    if text.is_empty() || label.is_empty() {
        return None;
    }

    Some(Entity {
        text: text.to_string(),
        label: label.to_uppercase(),
    })
}

fn strip_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // language tag, e.g. ```json, with or without a newline after it
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let rest = rest.trim_end();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_object_items() {
        let raw = r#"[{"text":"Ada Lovelace","label":"PERSON"},{"text":"London","label":"gpe"}]"#;
        let entities = decode_entities(raw).unwrap();
        assert_eq!(
            entities,
            vec![
                Entity { text: "Ada Lovelace".into(), label: "PERSON".into() },
                Entity { text: "London".into(), label: "GPE".into() },
            ]
        );
    }

    #[test]
    fn accepts_fenced_reply_and_pairs() {
        let raw = "```json\n[[\"Apple\", \"ORG\"]]\n```";
        let entities = decode_entities(raw).unwrap();
        assert_eq!(entities, vec![Entity { text: "Apple".into(), label: "ORG".into() }]);
    }

    #[test]
    fn accepts_single_line_fence_with_tag() {
        let raw = r#"```json[{"text":"Berlin","label":"GPE"}]```"#;
        let entities = decode_entities(raw).unwrap();
        assert_eq!(entities, vec![Entity { text: "Berlin".into(), label: "GPE".into() }]);

        let untagged = r#"```[["Berlin","GPE"]]```"#;
        assert_eq!(decode_entities(untagged).unwrap().len(), 1);
    }

    #[test]
    fn skips_malformed_items() {
        let raw = r#"[{"text":"Paris"}, 42, {"text":"Rome","label":"GPE"}, {"text":" ","label":"X"}]"#;
        let entities = decode_entities(raw).unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "Rome");
    }

    #[test]
    fn rejects_non_array() {
        assert!(decode_entities(r#"{"entities":[]}"#).is_err());
        assert!(decode_entities("no entities here").is_err());
    }

    #[test]
    fn empty_array_is_ok() {
        assert!(decode_entities("[]").unwrap().is_empty());
    }
}
