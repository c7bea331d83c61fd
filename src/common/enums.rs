/// Tagged exit codes for process-fatal faults.
pub mod error_code;
