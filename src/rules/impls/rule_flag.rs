use crate::rules::enums::rule_flag::RuleFlag;

impl RuleFlag {
    pub fn from_keyword(keyword: &str) -> Option<RuleFlag> {
        match keyword {
            "fileonly" => Some(RuleFlag::FileOnly),
            "dironly" => Some(RuleFlag::DirOnly),
            "mkdir" => Some(RuleFlag::Mkdir),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleFlag::FileOnly => "fileonly",
            RuleFlag::DirOnly => "dironly",
            RuleFlag::Mkdir => "mkdir",
        }
    }
}
