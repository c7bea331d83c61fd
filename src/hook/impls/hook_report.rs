use serde_json::{json, Value};
use crate::common::enums::error_code::ErrorCode;
use crate::hook::structs::hook_report::HookReport;

impl HookReport {
    pub fn error_code(&self) -> ErrorCode {
        match self.move_error {
            Some(_) => ErrorCode::MoveFail,
            None => ErrorCode::Ok,
        }
    }

    pub fn to_json(&self) -> Value {
        match &self.move_error {
            None => json!({"status": "ok", "job": self.job}),
            Some(e) => json!({"status": "error", "error": e, "job": self.job}),
        }
    }
}
