/// Successful hook result.
pub mod hook_report;
