use bytes::Bytes;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::InvalidEvent;

/// Named values carried by an event.
pub type EventData = Map<String, Value>;

/// The generic envelope every message travels in.
///
/// The header (`type` and `data`) is serde-serializable. The payload is not:
/// it travels next to the header and its framing belongs to the transport.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    /// Tag identifying the message kind, e.g. "audio-chunk".
    #[serde(rename = "type", deserialize_with = "tag")]
    event_type: String,

    /// Field values, absent when the message has none.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty"
    )]
    data: Option<EventData>,

    /// Raw binary data such as audio samples.
    #[serde(skip)]
    payload: Option<Bytes>,
}

impl Event {
    pub fn new(
        event_type: impl Into<String>,
        data: Option<EventData>,
        payload: Option<Bytes>,
    ) -> Result<Self, InvalidEvent> {
        let event_type = event_type.into();
        if event_type.is_empty() {
            return Err(InvalidEvent);
        }
        Ok(Self::typed(event_type, data, payload))
    }

    /// Builds an envelope for a tag that is known to be non-empty.
    pub(crate) fn typed(
        event_type: impl Into<String>,
        data: Option<EventData>,
        payload: Option<Bytes>,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            data: data.filter(|data| !data.is_empty()),
            payload,
        }
    }

    /// Attaches a payload, e.g. after the transport has read it off the wire.
    pub fn with_payload(mut self, payload: impl Into<Bytes>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn data(&self) -> Option<&EventData> {
        self.data.as_ref()
    }

    pub fn payload(&self) -> Option<&Bytes> {
        self.payload.as_ref()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.get_field(name).is_some()
    }

    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.data.as_ref().and_then(|data| data.get(name))
    }

    pub fn into_parts(self) -> (String, Option<EventData>, Option<Bytes>) {
        (self.event_type, self.data, self.payload)
    }
}

fn tag<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let event_type = String::deserialize(deserializer)?;
    if event_type.is_empty() {
        return Err(serde::de::Error::custom(InvalidEvent));
    }
    Ok(event_type)
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<EventData>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let data = Option::<EventData>::deserialize(deserializer)?;
    Ok(data.filter(|data| !data.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> Option<EventData> {
        match value {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    #[test]
    fn test_empty_type_is_rejected() {
        assert_eq!(Event::new("", None, None), Err(InvalidEvent));
        assert!(Event::new("ping", None, None).is_ok());
    }

    #[test]
    fn test_field_access() {
        let event = Event::new("transcript", data(json!({"text": "hello"})), None).unwrap();
        assert!(event.has_field("text"));
        assert!(!event.has_field("language"));
        assert_eq!(event.get_field("text"), Some(&json!("hello")));
        assert_eq!(event.get_field("language"), None);
    }

    #[test]
    fn test_empty_data_is_absent() {
        let event = Event::new("ping", Some(EventData::new()), None).unwrap();
        assert_eq!(event.data(), None);
        assert_eq!(event, Event::new("ping", None, None).unwrap());
    }

    #[test]
    fn test_equality_ignores_key_order() {
        let first = Event::new("audio-start", data(json!({"rate": 16000, "width": 2})), None);
        let mut reordered = EventData::new();
        reordered.insert("width".to_string(), json!(2));
        reordered.insert("rate".to_string(), json!(16000));
        let second = Event::new("audio-start", Some(reordered), None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_payload_compared_bytewise() {
        let event = Event::new("audio-chunk", None, None).unwrap();
        let zeros = event.clone().with_payload(vec![0u8; 4]);
        let ones = event.clone().with_payload(vec![1u8; 4]);
        assert_ne!(zeros, ones);
        assert_ne!(zeros, event);
        assert_eq!(zeros, event.with_payload(Bytes::from_static(&[0, 0, 0, 0])));
    }

    #[test]
    fn test_header_serialization() {
        let event = Event::new("transcript", data(json!({"text": "hi"})), None)
            .unwrap()
            .with_payload(vec![1, 2, 3]);
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"transcript","data":{"text":"hi"}}"#);

        let header: Event = serde_json::from_str(r#"{"type":"ping","data":{}}"#).unwrap();
        assert_eq!(header, Event::new("ping", None, None).unwrap());
    }

    #[test]
    fn test_header_with_empty_type_is_rejected() {
        assert!(serde_json::from_str::<Event>(r#"{"type":""}"#).is_err());
        assert!(serde_json::from_str::<Event>(r#"{"type":"","data":{"text":"hi"}}"#).is_err());
        assert!(serde_json::from_str::<Event>(r#"{"data":{}}"#).is_err());
    }
}
