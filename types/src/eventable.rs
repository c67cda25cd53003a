use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::DecodeError;
use crate::event::{Event, EventData};

/// Caller-defined correlation values, passed through untouched.
///
/// An absent context and an empty one are the same thing: an empty context
/// is never written, and a missing one decodes to an empty map.
pub type Context = serde_json::Map<String, Value>;

/// A message kind that converts to and from an [`Event`] envelope.
pub trait Eventable: Sized {
    /// Canonical event type written by [`Eventable::event`].
    const TYPE: &'static str;

    fn event(&self) -> Event;

    fn is_type(event_type: &str) -> bool {
        event_type == Self::TYPE
    }

    fn from_event(event: Event) -> Result<Self, DecodeError>;
}

/// Collects the fields of an outgoing event, leaving unset values out.
pub(crate) struct DataBuilder {
    data: EventData,
}

impl DataBuilder {
    pub(crate) fn new() -> Self {
        Self {
            data: EventData::new(),
        }
    }

    /// Writes one field.
    ///
    /// Only called with scalars, strings, lists and serde-derived structs or
    /// maps keyed by `String`, none of which can fail to become a JSON value.
    pub(crate) fn field<T: Serialize>(mut self, key: &str, value: T) -> Self {
        let value = serde_json::to_value(value).expect("event field values have string keys");
        self.data.insert(key.to_string(), value);
        self
    }

    pub(crate) fn optional<T: Serialize>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    /// Writes a list unless it is empty.
    pub(crate) fn list<T: Serialize>(self, key: &str, values: &[T]) -> Self {
        if values.is_empty() {
            self
        } else {
            self.field(key, values)
        }
    }

    pub(crate) fn context(self, context: &Context) -> Self {
        if context.is_empty() {
            self
        } else {
            self.field("context", context)
        }
    }

    pub(crate) fn into_event(self, event_type: &'static str) -> Event {
        Event::typed(event_type, Some(self.data), None)
    }
}

/// Reads the fields of an incoming event for one variant.
///
/// A field holding `null` counts as absent.
pub(crate) struct Data<'a> {
    variant: &'static str,
    data: Option<&'a EventData>,
}

impl<'a> Data<'a> {
    pub(crate) fn new(variant: &'static str, event: &'a Event) -> Self {
        Self {
            variant,
            data: event.data(),
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.data
            .and_then(|data| data.get(key))
            .filter(|value| !value.is_null())
    }

    pub(crate) fn required<T: DeserializeOwned>(&self, key: &'static str) -> Result<T, DecodeError> {
        let value = self
            .get(key)
            .ok_or_else(|| DecodeError::missing(self.variant, key))?;
        self.convert(key, value)
    }

    pub(crate) fn optional<T: DeserializeOwned>(
        &self,
        key: &'static str,
    ) -> Result<Option<T>, DecodeError> {
        self.get(key).map(|value| self.convert(key, value)).transpose()
    }

    pub(crate) fn or_default<T: DeserializeOwned + Default>(
        &self,
        key: &'static str,
    ) -> Result<T, DecodeError> {
        Ok(self.optional(key)?.unwrap_or_default())
    }

    pub(crate) fn context(&self) -> Result<Context, DecodeError> {
        self.or_default("context")
    }

    fn convert<T: DeserializeOwned>(&self, key: &'static str, value: &Value) -> Result<T, DecodeError> {
        T::deserialize(value).map_err(|e| DecodeError::malformed(self.variant, key, e.to_string()))
    }
}

/// Declares a message kind that carries no fields.
macro_rules! unit_eventable {
    ($(#[$meta:meta])* $name:ident => $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl $crate::Eventable for $name {
            const TYPE: &'static str = $tag;

            fn event(&self) -> $crate::Event {
                $crate::Event::typed(Self::TYPE, None, None)
            }

            fn from_event(_event: $crate::Event) -> Result<Self, $crate::DecodeError> {
                Ok(Self)
            }
        }
    };
}

pub(crate) use unit_eventable;
