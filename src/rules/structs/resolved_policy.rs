use serde::Serialize;
use serde_json::{Map, Value};

/// Effective policy of a ruleset after group merge and `moveto` expansion.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct ResolvedPolicy {
    pub(crate) values: Map<String, Value>,
}
