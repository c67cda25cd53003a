//! Speech to text.

use crate::eventable::{Data, DataBuilder, unit_eventable};
use crate::{Context, DecodeError, Event, Eventable};

/// `transcribe` event: transcribe the audio stream that follows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcribe {
    /// Name of the ASR model to use.
    pub name: Option<String>,
    pub language: Option<String>,
    pub context: Context,
}

impl Transcribe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }
}

impl Eventable for Transcribe {
    const TYPE: &'static str = "transcribe";

    fn event(&self) -> Event {
        DataBuilder::new()
            .optional("name", self.name.as_ref())
            .optional("language", self.language.as_ref())
            .context(&self.context)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            name: data.optional("name")?,
            language: data.optional("language")?,
            context: data.context()?,
        })
    }
}

/// `transcript` event: the final transcription of an audio stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub text: String,
    pub language: Option<String>,
    pub context: Context,
}

impl Transcript {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            language: None,
            context: Context::new(),
        }
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }
}

impl Eventable for Transcript {
    const TYPE: &'static str = "transcript";

    fn event(&self) -> Event {
        DataBuilder::new()
            .field("text", &self.text)
            .optional("language", self.language.as_ref())
            .context(&self.context)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            text: data.required("text")?,
            language: data.optional("language")?,
            context: data.context()?,
        })
    }
}

/// `transcript-start` event: a streaming transcript begins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscriptStart {
    pub language: Option<String>,
    pub context: Context,
}

impl Eventable for TranscriptStart {
    const TYPE: &'static str = "transcript-start";

    fn event(&self) -> Event {
        DataBuilder::new()
            .optional("language", self.language.as_ref())
            .context(&self.context)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            language: data.optional("language")?,
            context: data.context()?,
        })
    }
}

/// `transcript-chunk` event: a piece of a streaming transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptChunk {
    pub text: String,
}

impl TranscriptChunk {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl Eventable for TranscriptChunk {
    const TYPE: &'static str = "transcript-chunk";

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
    /// `transcript-stop` event: the streaming transcript is complete.
    TranscriptStop => "transcript-stop"
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transcript_round_trip() {
        let transcript = Transcript::new("turn on the lights").with_language("en");
        let event = transcript.event();
        assert_eq!(
            event.data(),
            json!({"text": "turn on the lights", "language": "en"}).as_object()
        );
        assert_eq!(Transcript::from_event(event).unwrap(), transcript);
    }

    #[test]
    fn test_transcript_requires_text() {
        let err = Transcript::from_event(Event::new(Transcript::TYPE, None, None).unwrap())
            .unwrap_err();
        assert_eq!(err.variant, "transcript");
        assert_eq!(err.field, "text");
        assert!(err.is_missing());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let data = json!({"text": "hello", "confidence": 0.9, "words": []});
        let event = Event::new(TranscriptChunk::TYPE, data.as_object().cloned(), None).unwrap();
        assert_eq!(TranscriptChunk::from_event(event).unwrap(), TranscriptChunk::new("hello"));
    }

    #[test]
    fn test_transcribe_defaults() {
        let transcribe = Transcribe::new();
        assert_eq!(transcribe.event().data(), None);
        assert_eq!(Transcribe::from_event(transcribe.event()).unwrap(), transcribe);

        let named = Transcribe::new().with_name("tiny-int8").with_language("fr");
        assert_eq!(Transcribe::from_event(named.event()).unwrap(), named);
    }
}
