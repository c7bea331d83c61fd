#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Success,
    /// Done, but something the operator should know about happened.
    Warnings(String),
    /// Failed with a handler-specific code.
    Failure(i32),
}
