use serde_json::{json, Value};
use crate::common::enums::error_code::ErrorCode;
use crate::hook::errors::HookError;

impl HookError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            HookError::FetchError(_) => ErrorCode::HookFail,
            HookError::MkdirError { .. } | HookError::MoveError(_) => ErrorCode::MoveFail,
            HookError::EnqueueError(_) => ErrorCode::ProcFail,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({"status": "error", "error": self.to_string()})
    }
}
