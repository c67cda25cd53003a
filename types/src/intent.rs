//! Intent recognition.

use crate::eventable::{Data, DataBuilder};
use crate::{Context, DecodeError, Event, Eventable};

/// A named slot value extracted from recognized text.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Entity {
    pub name: String,
    pub value: String,
}

impl Entity {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// `recognize` event: recognize an intent from text.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognize {
    pub text: String,
    pub context: Context,
}

impl Recognize {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            context: Context::new(),
        }
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }
}

impl Eventable for Recognize {
    const TYPE: &'static str = "recognize";

    fn event(&self) -> Event {
        DataBuilder::new()
            .field("text", &self.text)
            .context(&self.context)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            text: data.required("text")?,
            context: data.context()?,
        })
    }
}

/// `intent` event: an intent was recognized.
///
/// Entities keep their order on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Intent {
    pub name: String,
    pub entities: Vec<Entity>,
    /// Text that was recognized, or a response to speak.
    pub text: Option<String>,
    pub context: Context,
}

impl Intent {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entities: Vec::new(),
            text: None,
            context: Context::new(),
        }
    }

    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }
}

impl Eventable for Intent {
    const TYPE: &'static str = "intent";

    fn event(&self) -> Event {
        DataBuilder::new()
            .field("name", &self.name)
            .list("entities", &self.entities)
            .optional("text", self.text.as_ref())
            .context(&self.context)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            name: data.required("name")?,
            entities: data.or_default("entities")?,
            text: data.optional("text")?,
            context: data.context()?,
        })
    }
}

/// `not-recognized` event: no intent matched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotRecognized {
    /// Explanation suitable for the user.
    pub text: Option<String>,
    pub context: Context,
}

impl NotRecognized {
    pub fn new(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            context: Context::new(),
        }
    }
}

impl Eventable for NotRecognized {
    const TYPE: &'static str = "not-recognized";

    fn event(&self) -> Event {
        DataBuilder::new()
            .optional("text", self.text.as_ref())
            .context(&self.context)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            text: data.optional("text")?,
            context: data.context()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_intent_keeps_entities_and_context() {
        let mut context = Context::new();
        context.insert("test".to_string(), json!("context"));
        let intent = Intent::new("TestIntent")
            .with_entity(Entity::new("test entity", "test-value"))
            .with_entity(Entity::new("area", "kitchen"))
            .with_context(context);

        let event = intent.event();
        assert_eq!(
            event.get_field("entities"),
            Some(&json!([
                {"name": "test entity", "value": "test-value"},
                {"name": "area", "value": "kitchen"},
            ]))
        );
        assert_eq!(event.get_field("context"), Some(&json!({"test": "context"})));

        let decoded = Intent::from_event(event).unwrap();
        assert_eq!(decoded.entities[0].name, "test entity");
        assert_eq!(decoded.entities[1].name, "area");
        assert_eq!(decoded, intent);
    }

    #[test]
    fn test_entities_must_be_pairs() {
        for entities in [json!("area=kitchen"), json!([{"name": "area"}]), json!([{"name": 1, "value": "x"}])] {
            let data = json!({"name": "TestIntent", "entities": entities});
            let event = Event::new(Intent::TYPE, data.as_object().cloned(), None).unwrap();
            let err = Intent::from_event(event).unwrap_err();
            assert_eq!(err.field, "entities");
            assert!(!err.is_missing());
        }
    }

    #[test]
    fn test_not_recognized_defaults() {
        let empty = NotRecognized::default();
        assert_eq!(NotRecognized::from_event(empty.event()).unwrap(), empty);

        let explained = NotRecognized::new("I didn't understand");
        assert_eq!(NotRecognized::from_event(explained.event()).unwrap(), explained);
    }
}
