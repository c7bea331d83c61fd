use serde_json::Value;
use crate::rules::enums::directive::Directive;
use crate::rules::enums::directive_slot::DirectiveSlot;

impl Directive {
    pub fn slot(&self) -> DirectiveSlot {
        match self {
            Directive::Match { .. } => DirectiveSlot::Match,
            Directive::Exclude { .. } => DirectiveSlot::Exclude,
            Directive::MoveTo(_) => DirectiveSlot::MoveTo,
            Directive::Type(_) => DirectiveSlot::Type,
            Directive::Name(_) => DirectiveSlot::Name,
            Directive::Flag { flag, .. } => DirectiveSlot::Flag(*flag),
            Directive::Var { key, .. } => DirectiveSlot::Var(key.clone()),
        }
    }

    /// Key and value of the directive in rendered output. Disabled flags render nothing.
    pub fn render(&self) -> Option<(String, Value)> {
        match self {
            Directive::Match { pattern, strict } => {
                let key = if *strict { "matchs" } else { "match" };
                Some((key.to_string(), Value::String(pattern.as_str().to_string())))
            }
            Directive::Exclude { pattern, strict } => {
                let key = if *strict { "excludes" } else { "exclude" };
                Some((key.to_string(), Value::String(pattern.as_str().to_string())))
            }
            Directive::MoveTo(path) => Some(("moveto".to_string(), Value::String(path.clone()))),
            Directive::Type(group) => Some(("type".to_string(), Value::String(group.clone()))),
            Directive::Name(name) => Some(("name".to_string(), Value::String(name.clone()))),
            Directive::Flag { flag, enabled } => enabled.then(|| (flag.as_str().to_string(), Value::Bool(true))),
            Directive::Var { key, value } => Some((key.clone(), Value::String(value.clone()))),
        }
    }
}
