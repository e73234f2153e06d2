//! Turn validated model output into records
//!
//! The schema guarantees shape; these functions apply the remaining rules
//! (blank names dropped, tension clamped) and skip entries that still fail.

use crate::types::StoryElements;
use serde_json::Value;
use storyloom_domain::{CharacterSketch, OutlinePoint};
use tracing::warn;

/// Parse an array of character objects, skipping unusable entries
pub(crate) fn parse_characters(json: &Value) -> Vec<CharacterSketch> {
    let Some(items) = json.as_array() else {
        warn!("Expected a JSON array of characters");
        return Vec::new();
    };

    let mut sketches = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        match parse_character(item) {
            Ok(sketch) => sketches.push(sketch),
            Err(e) => warn!("Skipping character {}: {}", idx, e),
        }
    }
    sketches
}

fn parse_character(json: &Value) -> Result<CharacterSketch, String> {
    let obj = json
        .as_object()
        .ok_or_else(|| "Character is not a JSON object".to_string())?;

    let name = text_field(obj, "name").trim().to_string();
    if name.is_empty() {
        return Err("Blank name".to_string());
    }

    Ok(CharacterSketch {
        name,
        role: optional_text(obj, "role"),
        conflict: text_field(obj, "conflict"),
        obstacle: text_field(obj, "obstacle"),
        action: text_field(obj, "action"),
        ending: text_field(obj, "ending"),
        description: optional_text(obj, "description"),
    })
}

/// Parse an array of outline stages, clamping tension to 0-100
pub(crate) fn parse_outline(json: &Value) -> Vec<OutlinePoint> {
    let Some(items) = json.as_array() else {
        warn!("Expected a JSON array of outline points");
        return Vec::new();
    };

    let mut points = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        match parse_outline_point(item) {
            Ok(point) => points.push(point),
            Err(e) => warn!("Skipping outline point {}: {}", idx, e),
        }
    }
    points
}

fn parse_outline_point(json: &Value) -> Result<OutlinePoint, String> {
    let obj = json
        .as_object()
        .ok_or_else(|| "Outline point is not a JSON object".to_string())?;

    let stage = text_field(obj, "stage").trim().to_string();
    if stage.is_empty() {
        return Err("Blank stage".to_string());
    }

    let tension = obj
        .get("tension")
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f.round() as i64)))
        .ok_or_else(|| "Missing or invalid 'tension'".to_string())?;

    Ok(OutlinePoint::new(stage, tension, text_field(obj, "description")))
}

/// Parse the combined elements object
pub(crate) fn parse_story_elements(json: &Value) -> StoryElements {
    StoryElements {
        characters: json
            .get("characters")
            .map(parse_characters)
            .unwrap_or_default(),
        outline_points: json
            .get("outlinePoints")
            .map(parse_outline)
            .unwrap_or_default(),
    }
}

fn text_field(obj: &serde_json::Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

fn optional_text(obj: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_names_dropped() {
        let value = json!([
            {"name": "Mara", "conflict": "c", "obstacle": "o", "action": "a", "ending": "e"},
            {"name": "   ", "conflict": "c", "obstacle": "o", "action": "a", "ending": "e"},
            {"name": "Tobin", "conflict": "", "obstacle": "", "action": "", "ending": "", "role": "Antagonist"}
        ]);
        let sketches = parse_characters(&value);
        assert_eq!(sketches.len(), 2);
        assert_eq!(sketches[0].name, "Mara");
        assert_eq!(sketches[0].role, None);
        assert_eq!(sketches[1].role.as_deref(), Some("Antagonist"));
    }

    #[test]
    fn test_tension_clamped() {
        let value = json!([
            {"stage": "Setup", "tension": -20, "description": "calm"},
            {"stage": "Climax", "tension": 140, "description": "storm"},
            {"stage": "Turn", "tension": 62.6, "description": "shift"}
        ]);
        let points = parse_outline(&value);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].tension, 0);
        assert_eq!(points[1].tension, 100);
        assert_eq!(points[2].tension, 63);
    }

    #[test]
    fn test_outline_point_without_tension_skipped() {
        let value = json!([
            {"stage": "Setup", "description": "calm"},
            {"stage": "End", "tension": 10, "description": "quiet"}
        ]);
        let points = parse_outline(&value);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].stage, "End");
    }

    #[test]
    fn test_non_array_is_empty() {
        assert!(parse_characters(&json!({"name": "Mara"})).is_empty());
        assert!(parse_outline(&json!("nope")).is_empty());
    }

    #[test]
    fn test_story_elements() {
        let value = json!({
            "characters": [{"name": "Ines", "role": "Protagonist", "description": "A mapmaker"}],
            "outlinePoints": [{"stage": "Flood", "tension": 80, "description": "Water rises"}]
        });
        let elements = parse_story_elements(&value);
        assert_eq!(elements.characters[0].description.as_deref(), Some("A mapmaker"));
        assert_eq!(elements.characters[0].conflict, "");
        assert_eq!(elements.outline_points[0].tension, 80);
    }
}
