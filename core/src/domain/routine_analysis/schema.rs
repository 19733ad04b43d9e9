use serde_json::{Value, json};

pub const METRIC_NAMES: [&str; 4] = [
    "Effectiveness",
    "Safety",
    "Goal Alignment",
    "Routine Consistency",
];

fn insight_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "text": { "type": "string" },
            "icon": { "type": "string" },
            "type": { "type": "string" }
        },
        "required": ["text", "icon", "type"]
    })
}

fn metric_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "score": { "type": "number" },
            "rating": { "type": "string" },
            "explanation": { "type": "string" }
        },
        "required": ["score", "rating", "explanation"]
    })
}

fn routine_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "score": { "type": "number" },
            "analysis": { "type": "string" },
            "products": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "score": { "type": "number" },
                        "rating": { "type": "string" },
                        "issues": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["id", "score", "rating", "issues"]
                }
            },
            "insights": {
                "type": "array",
                "items": insight_schema()
            }
        },
        "required": ["score", "analysis", "products", "insights"]
    })
}

/// Returns the JSON schema for routine analysis LLM responses
pub fn get_routine_analysis_schema() -> Value {
    let metrics: serde_json::Map<String, Value> = METRIC_NAMES
        .iter()
        .map(|name| (name.to_string(), metric_schema()))
        .collect();

    json!({
        "type": "object",
        "properties": {
            "overallScore": {
                "type": "object",
                "properties": {
                    "score": { "type": "number" },
                    "rating": { "type": "string" },
                    "improvement": { "type": "string" },
                    "insights": {
                        "type": "array",
                        "items": insight_schema()
                    }
                },
                "required": ["score", "rating", "improvement", "insights"]
            },
            "metrics": {
                "type": "object",
                "properties": metrics,
                "required": METRIC_NAMES
            },
            "morningRoutine": routine_schema(),
            "eveningRoutine": routine_schema(),
            "weeklyRoutine": routine_schema(),
            "detailedIngredientAnalysis": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "purpose": { "type": "string" },
                        "strength": { "type": "string" },
                        "products": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "suggestions": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "warnings": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "evidence": {
                            "type": "object",
                            "properties": {
                                "summary": { "type": "string" },
                                "url": { "type": "string" }
                            },
                            "required": ["summary", "url"]
                        }
                    },
                    "required": [
                        "name", "purpose", "strength", "products",
                        "suggestions", "warnings", "evidence"
                    ]
                }
            },
            "ingredientCompatibility": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "ingredientA": { "type": "string" },
                        "ingredientB": { "type": "string" },
                        "compatible": { "type": "boolean" },
                        "reason": { "type": "string" }
                    },
                    "required": ["ingredientA", "ingredientB", "compatible", "reason"]
                }
            },
            "productRecommendations": {
                "type": "array",
                "items": { "type": "object" }
            }
        },
        "required": [
            "overallScore", "metrics", "morningRoutine", "eveningRoutine",
            "detailedIngredientAnalysis", "ingredientCompatibility"
        ]
    })
}
