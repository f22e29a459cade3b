use super::PATH_LEN;
use serde_json::{Value, json};

/// Top-level fields every response must carry.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "survivalPath",
    "creativePath",
    "survivalMotto",
    "creativeMotto",
    "survivalFear",
    "creativeVision",
];

fn action_path_schema() -> Value {
    json!({
        "type": "ARRAY",
        "minItems": PATH_LEN,
        "maxItems": PATH_LEN,
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "icon": {
                    "type": "STRING",
                    "description": "A simple emoji representing the step"
                }
            },
            "required": ["title", "description", "icon"]
        }
    })
}

/// Gemini `responseSchema` constraining the model to a `MindsetResponse`.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "survivalPath": action_path_schema(),
            "creativePath": action_path_schema(),
            "survivalMotto": {
                "type": "STRING",
                "description": "A 1-sentence catchy motto for survival mode"
            },
            "creativeMotto": {
                "type": "STRING",
                "description": "A 1-sentence catchy motto for creative mode"
            },
            "survivalFear": {
                "type": "STRING",
                "description": "The core fear driving the survival mode"
            },
            "creativeVision": {
                "type": "STRING",
                "description": "The core vision driving the creative mode"
            }
        },
        "required": REQUIRED_FIELDS
    })
}
