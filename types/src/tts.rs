//! Text to speech.

use crate::eventable::{Data, DataBuilder, unit_eventable};
use crate::{Context, DecodeError, Event, Eventable};

/// Selects the voice used for synthesis. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Voice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Speaker within a multi-speaker voice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

impl Voice {
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn with_speaker(mut self, speaker: &str) -> Self {
        self.speaker = Some(speaker.to_string());
        self
    }

    /// True when no part of the voice is chosen, i.e. the server default.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.language.is_none() && self.speaker.is_none()
    }

    fn non_empty(&self) -> Option<&Self> {
        (!self.is_empty()).then_some(self)
    }
}

/// `synthesize` event: speak the given text.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesize {
    pub text: String,
    pub voice: Voice,
    pub context: Context,
}

impl Synthesize {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            voice: Voice::default(),
            context: Context::new(),
        }
    }

    pub fn with_voice(mut self, voice: Voice) -> Self {
        self.voice = voice;
        self
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }
}

impl Eventable for Synthesize {
    const TYPE: &'static str = "synthesize";

    fn event(&self) -> Event {
        DataBuilder::new()
            .field("text", &self.text)
            .optional("voice", self.voice.non_empty())
            .context(&self.context)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            text: data.required("text")?,
            voice: data.or_default("voice")?,
            context: data.context()?,
        })
    }
}

/// `synthesize-start` event: streamed text for synthesis begins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynthesizeStart {
    pub voice: Voice,
    pub context: Context,
}

impl SynthesizeStart {
    pub fn new(voice: Voice) -> Self {
        Self {
            voice,
            context: Context::new(),
        }
    }
}

impl Eventable for SynthesizeStart {
    const TYPE: &'static str = "synthesize-start";

    fn event(&self) -> Event {
        DataBuilder::new()
            .optional("voice", self.voice.non_empty())
            .context(&self.context)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            voice: data.or_default("voice")?,
            context: data.context()?,
        })
    }
}

/// `synthesize-chunk` event: a piece of text to synthesize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizeChunk {
    pub text: String,
}

impl SynthesizeChunk {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl Eventable for SynthesizeChunk {
    const TYPE: &'static str = "synthesize-chunk";

    fn event(&self) -> Event {
        DataBuilder::new()
            .field("text", &self.text)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            text: data.required("text")?,
        })
    }
}

unit_eventable! {
    /// `synthesize-stop` event: no more text will be streamed.
    SynthesizeStop => "synthesize-stop"
}

unit_eventable! {
    /// `synthesize-stopped` event: synthesis of the streamed text has finished.
    SynthesizeStopped => "synthesize-stopped"
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_synthesize_with_voice() {
        let synthesize = Synthesize::new("test text")
            .with_voice(Voice::new("test-name").with_speaker("test-speaker"))
            .with_context(Context::new());

        let event = synthesize.event();
        assert_eq!(
            event.data(),
            json!({
                "text": "test text",
                "voice": {"name": "test-name", "speaker": "test-speaker"},
            })
            .as_object()
        );
        assert_eq!(Synthesize::from_event(event).unwrap(), synthesize);
    }

    #[test]
    fn test_missing_voice_is_default_voice() {
        let synthesize = Synthesize::new("test text");
        let event = synthesize.event();
        assert!(!event.has_field("voice"));

        let decoded = Synthesize::from_event(event).unwrap();
        assert!(decoded.voice.is_empty());
        assert_eq!(decoded.voice, Voice::default());
        assert_eq!(decoded, synthesize);
    }

    #[test]
    fn test_voice_must_be_a_mapping() {
        let data = json!({"text": "hi", "voice": "alloy"});
        let event = Event::new(Synthesize::TYPE, data.as_object().cloned(), None).unwrap();
        let err = Synthesize::from_event(event).unwrap_err();
        assert_eq!(err.field, "voice");
        assert!(!err.is_missing());
    }

    #[test]
    fn test_streaming_start_round_trip() {
        let start = SynthesizeStart::new(Voice::new("en_US-lessac").with_language("en_US"));
        assert_eq!(SynthesizeStart::from_event(start.event()).unwrap(), start);
        assert_eq!(SynthesizeStart::default().event().data(), None);
    }
}
