use regex::Regex;

#[derive(Debug, Clone)]
pub struct Pattern {
    pub(crate) authored: String,
    pub(crate) regex: Regex,
}
