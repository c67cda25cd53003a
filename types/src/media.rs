//! Media player control.

use crate::eventable::{Data, DataBuilder, unit_eventable};
use crate::{DecodeError, Event, Eventable};

/// `media-play` event: play media from a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPlay {
    pub url: String,
}

impl MediaPlay {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

impl Eventable for MediaPlay {
    const TYPE: &'static str = "media-play";

    fn event(&self) -> Event {
        DataBuilder::new()
            .field("url", &self.url)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            url: data.required("url")?,
        })
    }
}

unit_eventable! {
    /// `media-stop` event.
    MediaStop => "media-stop"
}

unit_eventable! {
    /// `media-pause` event.
    MediaPause => "media-pause"
}

unit_eventable! {
    /// `media-unpause` event: resume paused media.
    MediaUnpause => "media-unpause"
}
