//! JSON-RPC 2.0 envelope and method dispatch.
//!
//! The gateway speaks three methods: `ping`, `tools/list`, and `tools/call`
//! (with `generateTitles` as the only tool). Dispatch itself is synchronous;
//! the pipeline does no I/O besides reading the clock.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use titleforge_core::generate_titles_from_args;

pub const AGENT_NAME: &str = "titleforge";

pub const PARSE_ERROR: i64 = -32700;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub params: Value,
    #[serde(default)]
    pub id: Value,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: Value,
}

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
            id,
        }
    }

    /// Answer for a frame that did not parse as JSON-RPC at all. JSON-RPC
    /// 2.0 uses a null id here since the request id is unrecoverable.
    pub fn parse_error() -> Self {
        Self::error(Value::Null, PARSE_ERROR, "Parse error")
    }
}

/// Dispatches one decoded request to its handler.
pub fn handle_request(request: JsonRpcRequest) -> JsonRpcResponse {
    tracing::info!(method = %request.method, "received request");
    match request.method.as_str() {
        "ping" => handle_ping(request.id),
        "tools/list" => handle_tools_list(request.id),
        "tools/call" => handle_tool_call(&request.params, request.id),
        other => JsonRpcResponse::error(
            request.id,
            METHOD_NOT_FOUND,
            format!("Method not found: {other}"),
        ),
    }
}

fn handle_ping(id: Value) -> JsonRpcResponse {
    JsonRpcResponse::success(
        id,
        json!({
            "status": "ok",
            "agent": AGENT_NAME,
            "version": titleforge_core::version(),
            "timestamp": Utc::now().to_rfc3339(),
        }),
    )
}

fn handle_tools_list(id: Value) -> JsonRpcResponse {
    JsonRpcResponse::success(
        id,
        json!({
            "tools": [
                {
                    "name": "generateTitles",
                    "description": "Generate SEO-optimized video titles based on analyzed keywords",
                    "inputSchema": {
                        "type": "object",
                        "properties": {
                            "concept": {
                                "type": "string",
                                "description": "The main video concept"
                            },
                            "keywords": {
                                "type": "object",
                                "description": "Analyzed keywords with recommendations"
                            },
                            "contentStyle": {
                                "type": "string",
                                "enum": ["tutorial", "review", "listicle", "howTo", "entertainment", "educational"],
                                "description": "Style of content"
                            },
                            "targetAudience": {
                                "type": "string",
                                "description": "Target audience"
                            },
                            "count": {
                                "type": "number",
                                "description": "Number of titles to generate",
                                "default": 5
                            },
                            "tone": {
                                "type": "string",
                                "enum": ["professional", "casual", "clickbait", "educational"],
                                "description": "Tone of the titles"
                            }
                        },
                        "required": ["concept", "keywords"]
                    }
                }
            ]
        }),
    )
}

fn handle_tool_call(params: &Value, id: Value) -> JsonRpcResponse {
    let name = params.get("name").and_then(Value::as_str).unwrap_or("");
    if name != "generateTitles" {
        return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Unknown tool: {name}"));
    }

    let args = params.get("arguments").cloned().unwrap_or(Value::Null);
    match generate_titles_from_args(&args) {
        Ok(result) => match serde_json::to_value(&result) {
            Ok(value) => JsonRpcResponse::success(id, json!({ "content": value })),
            Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, e.to_string()),
        },
        Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, e.to_string()),
    }
}
