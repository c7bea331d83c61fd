use serde::Serialize;
use crate::rules::structs::resolved_policy::ResolvedPolicy;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RuleMatch {
    pub name: String,
    pub policy: ResolvedPolicy,
}
