//! Raw PCM audio streams.

use bytes::Bytes;

use crate::eventable::{Data, DataBuilder};
use crate::{DecodeError, Event, Eventable};

/// Sample layout of an audio stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AudioFormat {
    /// Samples per second, e.g. 16000.
    pub rate: u32,
    /// Bytes per sample.
    pub width: u32,
    pub channels: u32,
}

impl AudioFormat {
    pub fn new(rate: u32, width: u32, channels: u32) -> Self {
        Self {
            rate,
            width,
            channels,
        }
    }

    /// Bytes taken by one sample across all channels.
    pub fn frame_size(&self) -> usize {
        (self.width * self.channels) as usize
    }
}

fn write_format(builder: DataBuilder, format: AudioFormat) -> DataBuilder {
    builder
        .field("rate", format.rate)
        .field("width", format.width)
        .field("channels", format.channels)
}

fn read_format(data: &Data<'_>) -> Result<AudioFormat, DecodeError> {
    Ok(AudioFormat {
        rate: data.required("rate")?,
        width: data.required("width")?,
        channels: data.required("channels")?,
    })
}

/// `audio-start` event: an audio stream begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioStart {
    pub format: AudioFormat,
    /// Milliseconds since the start of the stream.
    pub timestamp: Option<u64>,
}

impl AudioStart {
    pub fn new(rate: u32, width: u32, channels: u32) -> Self {
        Self {
            format: AudioFormat::new(rate, width, channels),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

impl Eventable for AudioStart {
    const TYPE: &'static str = "audio-start";

    fn event(&self) -> Event {
        write_format(DataBuilder::new(), self.format)
            .optional("timestamp", self.timestamp)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            format: read_format(&data)?,
            timestamp: data.optional("timestamp")?,
        })
    }
}

/// `audio-chunk` event: a block of samples carried in the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioChunk {
    pub format: AudioFormat,
    pub audio: Bytes,
    pub timestamp: Option<u64>,
}

impl AudioChunk {
    pub fn new(rate: u32, width: u32, channels: u32, audio: impl Into<Bytes>) -> Self {
        Self {
            format: AudioFormat::new(rate, width, channels),
            audio: audio.into(),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Number of samples per channel in this chunk.
    pub fn samples(&self) -> usize {
        match self.format.frame_size() {
            0 => 0,
            frame => self.audio.len() / frame,
        }
    }

    /// Duration of the chunk in milliseconds.
    pub fn milliseconds(&self) -> u64 {
        if self.format.rate == 0 {
            return 0;
        }
        (self.samples() as u64 * 1000) / u64::from(self.format.rate)
    }
}

impl Eventable for AudioChunk {
    const TYPE: &'static str = "audio-chunk";

    fn event(&self) -> Event {
        write_format(DataBuilder::new(), self.format)
            .optional("timestamp", self.timestamp)
            .into_event(Self::TYPE)
            .with_payload(self.audio.clone())
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        let format = read_format(&data)?;
        let timestamp = data.optional("timestamp")?;
        // a chunk without payload is silent, not broken
        let audio = event.payload().cloned().unwrap_or_default();
        Ok(Self {
            format,
            audio,
            timestamp,
        })
    }
}

/// `audio-stop` event: the audio stream has ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioStop {
    pub timestamp: Option<u64>,
}

impl AudioStop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

impl Eventable for AudioStop {
    const TYPE: &'static str = "audio-stop";

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
