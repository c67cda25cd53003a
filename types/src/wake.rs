//! Wake word detection.

use crate::eventable::{Data, DataBuilder};
use crate::{Context, DecodeError, Event, Eventable};

/// `detect` event: start listening for wake words.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Detect {
    /// Wake words to listen for. `None` means any available wake word.
    pub names: Option<Vec<String>>,
    pub context: Context,
}

impl Detect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }
}

impl Eventable for Detect {
    const TYPE: &'static str = "detect";

    fn event(&self) -> Event {
        DataBuilder::new()
            .optional("names", self.names.as_ref())
            .context(&self.context)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            names: data.optional("names")?,
            context: data.context()?,
        })
    }
}

/// `detection` event: a wake word was heard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Detection {
    /// Name of the detected wake word model.
    pub name: Option<String>,
    /// Milliseconds since the start of the audio stream.
    pub timestamp: Option<u64>,
    /// Identified speaker, if the detector supports it.
    pub speaker: Option<String>,
    pub context: Context,
}

impl Detection {
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_speaker(mut self, speaker: &str) -> Self {
        self.speaker = Some(speaker.to_string());
        self
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }
}

impl Eventable for Detection {
    const TYPE: &'static str = "detection";

    fn event(&self) -> Event {
        DataBuilder::new()
            .optional("name", self.name.as_ref())
            .optional("timestamp", self.timestamp)
            .optional("speaker", self.speaker.as_ref())
            .context(&self.context)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            name: data.optional("name")?,
            timestamp: data.optional("timestamp")?,
            speaker: data.optional("speaker")?,
            context: data.context()?,
        })
    }
}

/// `not-detected` event: the audio stream ended without a wake word.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotDetected {
    pub context: Context,
}

impl Eventable for NotDetected {
    const TYPE: &'static str = "not-detected";

    fn event(&self) -> Event {
        DataBuilder::new()
            .context(&self.context)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            context: data.context()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_names_distinguish_none_from_empty() {
        let any = Detect::new();
        assert_eq!(any.event().data(), None);
        assert_eq!(Detect::from_event(any.event()).unwrap().names, None);

        let none: Vec<String> = Vec::new();
        let nothing = Detect::new().with_names(none);
        assert_eq!(nothing.event().get_field("names"), Some(&json!([])));
        assert_eq!(Detect::from_event(nothing.event()).unwrap(), nothing);
    }

    #[test]
    fn test_detection_round_trip() {
        let mut context = Context::new();
        context.insert("satellite".to_string(), json!({"area": "kitchen"}));
        let detection = Detection::new("ok_nabu")
            .with_timestamp(1200)
            .with_speaker("alice")
            .with_context(context);

        let event = detection.event();
        assert_eq!(event.get_field("name"), Some(&json!("ok_nabu")));
        assert_eq!(Detection::from_event(event).unwrap(), detection);
    }

    #[test]
    fn test_malformed_names() {
        let event = Event::new(Detect::TYPE, json!({"names": "ok_nabu"}).as_object().cloned(), None)
            .unwrap();
        let err = Detect::from_event(event).unwrap_err();
        assert_eq!(err.field, "names");
        assert!(!err.is_missing());
    }
}
