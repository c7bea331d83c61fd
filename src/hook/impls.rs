pub mod hook_error;
pub mod hook_report;
