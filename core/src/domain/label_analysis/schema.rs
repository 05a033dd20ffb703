use serde_json::json;

/// Returns the JSON schema for label analysis LLM responses
pub fn get_label_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "productName": { "type": "string", "nullable": true },
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "category": {
                            "type": "string",
                            "enum": ["red", "yellow", "green"]
                        },
                        "risk": {
                            "type": "string",
                            "enum": ["High Risk", "Moderate Risk", "Safe"]
                        },
                        "explanation": { "type": "string" }
                    },
                    "required": ["name", "category", "risk", "explanation"]
                }
            },
            "marketingClaims": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "claim": { "type": "string" },
                        "reality": { "type": "string" }
                    },
                    "required": ["claim", "reality"]
                }
            },
            "overallScore": {
                "type": "object",
                "properties": {
                    "red": { "type": "integer" },
                    "yellow": { "type": "integer" },
                    "green": { "type": "integer" }
                },
                "required": ["red", "yellow", "green"]
            },
            "summary": { "type": "string" }
        },
        "required": ["ingredients", "marketingClaims", "overallScore", "summary"]
    })
}
