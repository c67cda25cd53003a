//! Voice activity detection.

use crate::eventable::{Data, DataBuilder};
use crate::{DecodeError, Event, Eventable};

/// `voice-started` event: speech was detected in the audio stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoiceStarted {
    /// Milliseconds since the start of the audio stream.
    pub timestamp: Option<u64>,
}

impl Eventable for VoiceStarted {
    const TYPE: &'static str = "voice-started";

    fn event(&self) -> Event {
        DataBuilder::new()
            .optional("timestamp", self.timestamp)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            timestamp: data.optional("timestamp")?,
        })
    }
}

/// `voice-stopped` event: speech has ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoiceStopped {
    pub timestamp: Option<u64>,
}

impl Eventable for VoiceStopped {
    const TYPE: &'static str = "voice-stopped";

    fn event(&self) -> Event {
        DataBuilder::new()
            .optional("timestamp", self.timestamp)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            timestamp: data.optional("timestamp")?,
        })
    }
}
