//! Running a full voice-assistant pipeline.

use std::fmt;
use std::str::FromStr;

use crate::audio::AudioFormat;
use crate::eventable::{Data, DataBuilder};
use crate::{DecodeError, Event, Eventable};

/// Processing phases of a pipeline, in execution order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStage {
    /// Wake word detection.
    Wake,
    /// Speech to text.
    Asr,
    /// Intent recognition.
    Intent,
    /// Intent handling.
    Handle,
    /// Text to speech.
    Tts,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 5] = [
        PipelineStage::Wake,
        PipelineStage::Asr,
        PipelineStage::Intent,
        PipelineStage::Handle,
        PipelineStage::Tts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Wake => "wake",
            PipelineStage::Asr => "asr",
            PipelineStage::Intent => "intent",
            PipelineStage::Handle => "handle",
            PipelineStage::Tts => "tts",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pipeline stage: {0}")]
pub struct UnknownStage(pub String);

impl FromStr for PipelineStage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PipelineStage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| UnknownStage(s.to_string()))
    }
}

/// `run-pipeline` event: run the stages from `start_stage` to `end_stage`.
///
/// The stage range is carried as given. Whether `start_stage <= end_stage`
/// holds is up to the orchestrator; see [`RunPipeline::is_ordered`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPipeline {
    pub start_stage: PipelineStage,
    pub end_stage: PipelineStage,
    /// Wake word to listen for when starting at the wake stage.
    pub wake_word_name: Option<String>,
    pub wake_word_names: Option<Vec<String>>,
    /// Text to speak before the pipeline runs.
    pub announce_text: Option<String>,
    /// Start again once the pipeline ends. Only written when set.
    pub restart_on_end: bool,
    /// Format the satellite wants synthesized audio in.
    pub snd_format: Option<AudioFormat>,
}

impl RunPipeline {
    pub fn new(start_stage: PipelineStage, end_stage: PipelineStage) -> Self {
        Self {
            start_stage,
            end_stage,
            wake_word_name: None,
            wake_word_names: None,
            announce_text: None,
            restart_on_end: false,
            snd_format: None,
        }
    }

    pub fn with_wake_word_name(mut self, name: &str) -> Self {
        self.wake_word_name = Some(name.to_string());
        self
    }

    pub fn with_wake_word_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.wake_word_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_announce_text(mut self, text: &str) -> Self {
        self.announce_text = Some(text.to_string());
        self
    }

    pub fn with_restart_on_end(mut self, restart_on_end: bool) -> Self {
        self.restart_on_end = restart_on_end;
        self
    }

    pub fn with_snd_format(mut self, format: AudioFormat) -> Self {
        self.snd_format = Some(format);
        self
    }

    pub fn is_ordered(&self) -> bool {
        self.start_stage <= self.end_stage
    }

    /// Stages covered by this run, empty when the range is reversed.
    pub fn stages(&self) -> impl Iterator<Item = PipelineStage> + '_ {
        PipelineStage::ALL
            .into_iter()
            .filter(move |stage| (self.start_stage..=self.end_stage).contains(stage))
    }
}

impl Eventable for RunPipeline {
    const TYPE: &'static str = "run-pipeline";

    fn event(&self) -> Event {
        DataBuilder::new()
            .field("start_stage", self.start_stage)
            .field("end_stage", self.end_stage)
            .optional("wake_word_name", self.wake_word_name.as_ref())
            .optional("wake_word_names", self.wake_word_names.as_ref())
            .optional("announce_text", self.announce_text.as_ref())
            .optional("restart_on_end", self.restart_on_end.then_some(true))
            .optional("snd_format", self.snd_format)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            start_stage: data.required("start_stage")?,
            end_stage: data.required("end_stage")?,
            wake_word_name: data.optional("wake_word_name")?,
            wake_word_names: data.optional("wake_word_names")?,
            announce_text: data.optional("announce_text")?,
            restart_on_end: data.or_default("restart_on_end")?,
            snd_format: data.optional("snd_format")?,
        })
    }
}
