use std::fmt;
use crate::common::enums::error_code::ErrorCode;

impl ErrorCode {
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::Ok => 0,
            ErrorCode::Nothing => 1,
            ErrorCode::ConfBad => 2,
            ErrorCode::OptBad => 3,
            ErrorCode::ProcFail => 100,
            ErrorCode::HookFail => 101,
            ErrorCode::MoveFail => 102,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Ok => write!(f, "ok"),
            ErrorCode::Nothing => write!(f, "nothing to do"),
            ErrorCode::ConfBad => write!(f, "bad configuration"),
            ErrorCode::OptBad => write!(f, "bad option"),
            ErrorCode::ProcFail => write!(f, "process failure"),
            ErrorCode::HookFail => write!(f, "hook failure"),
            ErrorCode::MoveFail => write!(f, "move failure"),
        }
    }
}

impl From<ErrorCode> for std::process::ExitCode {
    fn from(code: ErrorCode) -> Self {
        std::process::ExitCode::from(code.code() as u8)
    }
}
