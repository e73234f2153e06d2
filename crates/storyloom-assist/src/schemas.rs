//! Output schemas requested from the model

use storyloom_llm::{Field, Schema};

fn character_fields() -> Vec<Field> {
    vec![
        Field::required("name", Schema::string()),
        Field::optional(
            "conflict",
            Schema::string().describe("Core desire or conflict"),
        ),
        Field::optional(
            "obstacle",
            Schema::string().describe("What stands in their way"),
        ),
        Field::optional(
            "action",
            Schema::string().describe("What they do to overcome it"),
        ),
        Field::required(
            "ending",
            Schema::string().describe("Their final outcome or fate"),
        ),
        Field::optional(
            "role",
            Schema::string().describe("Protagonist, Antagonist, Supporting or Extra"),
        ),
    ]
}

pub(crate) fn characters() -> Schema {
    Schema::array(Schema::object(character_fields()))
}

fn outline_point(tension: Schema) -> Schema {
    Schema::object(vec![
        Field::required(
            "stage",
            Schema::string().describe("Plot stage name, e.g. Inciting Incident, Climax"),
        ),
        Field::required("tension", tension.describe("Tension level from 0 to 100")),
        Field::required(
            "description",
            Schema::string().describe("What happens at this stage"),
        ),
    ])
}

pub(crate) fn outline() -> Schema {
    Schema::array(outline_point(Schema::integer()))
}

pub(crate) fn concept() -> Schema {
    Schema::object(vec![
        Field::required("title", Schema::string()),
        Field::required("synopsis", Schema::string()),
        Field::required("characterName", Schema::string()),
        Field::required("characterRole", Schema::string()),
        Field::required("characterDesc", Schema::string()),
        Field::required(
            "characterConflict",
            Schema::string().describe("Main character's core conflict"),
        ),
    ])
}

pub(crate) fn story_elements() -> Schema {
    let character = Schema::object(vec![
        Field::required("name", Schema::string()),
        Field::required("role", Schema::string()),
        Field::optional("conflict", Schema::string()),
        Field::optional("description", Schema::string()),
    ]);
    Schema::object(vec![
        Field::required("characters", Schema::array(character)),
        Field::required("outlinePoints", Schema::array(outline_point(Schema::number()))),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_character_requires_ending() {
        let schema = characters();
        let missing = json!([{"name": "Mara", "conflict": "c", "obstacle": "o", "action": "a"}]);
        assert!(schema.validate(&missing).is_err());

        let minimal = json!([{"name": "Mara", "ending": "Exiled"}]);
        assert!(schema.validate(&minimal).is_ok());
    }

    #[test]
    fn test_outline_tension_is_integer() {
        let schema = outline();
        let ok = json!([{"stage": "Climax", "tension": 95, "description": "The duel"}]);
        assert!(schema.validate(&ok).is_ok());

        let bad = json!([{"stage": "Climax", "tension": "high", "description": "The duel"}]);
        assert!(schema.validate(&bad).is_err());
    }

    #[test]
    fn test_concept_fields_match_record() {
        let value = json!({
            "title": "Salt Lines",
            "synopsis": "A cartographer maps a drowning city.",
            "characterName": "Ines",
            "characterRole": "Protagonist",
            "characterDesc": "Stubborn and precise",
            "characterConflict": "Duty against love"
        });
        assert!(concept().validate(&value).is_ok());
        let parsed: storyloom_domain::StoryConcept = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.character_name, "Ines");
    }

    #[test]
    fn test_elements_requires_both_lists() {
        let schema = story_elements();
        assert!(schema.validate(&json!({"characters": []})).is_err());
        assert!(schema
            .validate(&json!({"characters": [], "outlinePoints": []}))
            .is_ok());
    }
}
