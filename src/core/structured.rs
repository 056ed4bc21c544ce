//! JSON settings handler for `settings.json` and `*.code-workspace` files

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::errors::ToggleResult;
use super::io_utils::to_indented_json;
use super::traits::ConfigHandler;
use super::types::{SettingsFormat, ToggleOutcome, ToggleRule};

type Object = Map<String, Value>;

/// A parsed settings tree
///
/// For [`SettingsFormat::StructuredWrapped`] the exclude-list lives under
/// `rule.wrapper_key`; otherwise it sits at the root.
#[derive(Debug, Clone)]
pub struct StructuredSettings {
    root: Object,
    format: SettingsFormat,
    rule: ToggleRule,
}

impl StructuredSettings {
    /// Parse `text` as a JSON object. Returns `None` when the text is not
    /// plain JSON (comments, trailing commas) or the root is not an object.
    pub fn parse(text: &str, format: SettingsFormat, rule: ToggleRule) -> Option<Self> {
        let root = if text.trim().is_empty() {
            Object::new()
        } else {
            match serde_json::from_str::<Value>(text) {
                Ok(Value::Object(root)) => root,
                Ok(other) => {
                    debug!("settings root is not an object: {}", type_name(&other));
                    return None;
                }
                Err(e) => {
                    debug!("settings are not plain JSON: {}", e);
                    return None;
                }
            }
        };

        Some(Self { root, format, rule })
    }

    pub fn root(&self) -> &Object {
        &self.root
    }

    fn scope(&self) -> Option<&Object> {
        match self.format {
            SettingsFormat::StructuredWrapped => {
                self.root.get(&self.rule.wrapper_key)?.as_object()
            }
            _ => Some(&self.root),
        }
    }
}

impl ConfigHandler for StructuredSettings {
    fn format(&self) -> SettingsFormat {
        self.format
    }

    fn current(&self) -> ToggleOutcome {
        let hidden = self
            .scope()
            .and_then(|scope| scope.get(&self.rule.exclude_key))
            .and_then(Value::as_object)
            .and_then(|exclude| exclude.get(&self.rule.toggle_key))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        ToggleOutcome::from_hidden(hidden)
    }

    fn toggle(&mut self) -> ToggleOutcome {
        let Self { root, format, rule } = self;
        let flip = |scope: &mut Object| {
            with_object(scope, &rule.exclude_key, |exclude| {
                let key = &rule.toggle_key;
                let hidden = !exclude.get(key).and_then(Value::as_bool).unwrap_or(false);
                exclude.insert(key.clone(), Value::Bool(hidden));
                hidden
            })
        };

        let hidden = match format {
            SettingsFormat::StructuredWrapped => with_object(root, &rule.wrapper_key, flip),
            _ => flip(root),
        };
        ToggleOutcome::from_hidden(hidden)
    }

    fn render(&self) -> ToggleResult<String> {
        to_indented_json(&self.root)
    }
}

/// Run `f` on `map[key]` as an object, creating it (or replacing a
/// non-object) first. The entry keeps its position in the map.
fn with_object<R>(map: &mut Object, key: &str, f: impl FnOnce(&mut Object) -> R) -> R {
    let entry = map.entry(key.to_string()).or_insert(Value::Null);
    let mut object = match std::mem::take(entry) {
        Value::Object(object) => object,
        Value::Null => Object::new(),
        other => {
            warn!("replacing {} value under \"{}\"", type_name(&other), key);
            Object::new()
        }
    };
    let result = f(&mut object);
    *entry = Value::Object(object);
    result
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
