use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload of a single file or folder change notification.
///
/// The bridge treats this as opaque: whatever the event producer puts in
/// (path, change type, timestamps) is handed to the callback unmodified.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct EventMessage(pub Map<String, Value>);

impl EventMessage {
    pub fn new() -> Self {
        EventMessage(Map::new())
    }

    /// Build a message from a JSON value. Returns `None` if the value is not
    /// an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(EventMessage(map)),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl std::ops::Deref for EventMessage {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for EventMessage {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transparent_json_object() {
        let msg: EventMessage = serde_json::from_value(json!({
            "path": "reports/q3.pdf",
            "change": "create",
            "modified_time": 1724900000,
        }))
        .unwrap();

        assert_eq!(msg.get("path"), Some(&json!("reports/q3.pdf")));
        assert_eq!(msg.get("change"), Some(&json!("create")));
        assert_eq!(msg.len(), 3);
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(EventMessage::from_value(json!(["not", "an", "object"])).is_none());
        assert!(EventMessage::from_value(json!("plain string")).is_none());
    }
}
