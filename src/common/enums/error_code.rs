use serde::{Deserialize, Serialize};

/// Exit codes used by the binary when a command cannot complete.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Ok,
    Nothing,
    ConfBad,
    OptBad,
    ProcFail,
    HookFail,
    MoveFail,
}
