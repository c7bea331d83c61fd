#[derive(Debug, Clone, Default)]
pub struct LogSink;
