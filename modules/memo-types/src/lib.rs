//! Shared types for the memo service and its HTTP clients.

use serde::{Deserialize, Serialize};

// =====================================================
// Domain Types
// =====================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    pub id: String,
    pub content: String,
}

/// Body returned by `POST /memos` on success, serialized as a bare JSON string.
pub const MEMO_CREATED_MESSAGE: &str = "메모 추가에 성공했습니다.";

// =====================================================
// Validation Error Types
// =====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Missing,
    JsonInvalid,
    ModelType,
    StringType,
}

impl FieldErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            FieldErrorKind::Missing => "Field required",
            FieldErrorKind::JsonInvalid => "JSON decode error",
            FieldErrorKind::ModelType => "Input should be a valid object",
            FieldErrorKind::StringType => "Input should be a valid string",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: FieldErrorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<serde_json::Value>,
}

impl FieldError {
    pub fn new(loc: &[&str], kind: FieldErrorKind) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: kind.message().to_string(),
            kind,
            input: None,
        }
    }

    pub fn with_input(mut self, input: serde_json::Value) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_detail(mut self, detail: impl std::fmt::Display) -> Self {
        self.msg = format!("{}: {}", self.msg, detail);
        self
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub detail: Vec<FieldError>,
}
