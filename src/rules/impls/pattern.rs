use regex::{Regex, RegexBuilder};
use crate::rules::structs::pattern::Pattern;

impl Pattern {
    /// Loose patterns are case-insensitive substring searches; strict ones
    /// are case-sensitive and anchored at the start of the name.
    pub fn compile(authored: &str, strict: bool) -> Result<Pattern, regex::Error> {
        let regex = if strict {
            Regex::new(&format!("^(?:{})", authored))?
        } else {
            RegexBuilder::new(authored).case_insensitive(true).build()?
        };
        Ok(Pattern { authored: authored.to_string(), regex })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn as_str(&self) -> &str {
        &self.authored
    }
}
