//! Service discovery: a client sends `describe`, the service answers `info`.

use crate::audio::AudioFormat;
use crate::eventable::{Data, DataBuilder, unit_eventable};
use crate::{DecodeError, Event, Eventable};

unit_eventable! {
    /// `describe` event: ask a service what it provides.
    Describe => "describe"
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Attribution {
    pub name: String,
    pub url: String,
}

impl Attribution {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// Header shared by every program, model and voice description.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Artifact {
    pub name: String,
    #[serde(default)]
    pub attribution: Attribution,
    #[serde(default)]
    pub installed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Artifact {
    pub fn new(name: &str, attribution: Attribution) -> Self {
        Self {
            name: name.to_string(),
            attribution,
            installed: true,
            description: None,
            version: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AsrModel {
    #[serde(flatten)]
    pub artifact: Artifact,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AsrProgram {
    #[serde(flatten)]
    pub artifact: Artifact,
    #[serde(default)]
    pub models: Vec<AsrModel>,
    /// Sends `transcript-start`/`transcript-chunk`/`transcript-stop`.
    #[serde(default)]
    pub supports_transcript_streaming: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TtsVoiceSpeaker {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TtsVoice {
    #[serde(flatten)]
    pub artifact: Artifact,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speakers: Option<Vec<TtsVoiceSpeaker>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TtsProgram {
    #[serde(flatten)]
    pub artifact: Artifact,
    #[serde(default)]
    pub voices: Vec<TtsVoice>,
    /// Accepts `synthesize-start`/`synthesize-chunk`/`synthesize-stop`.
    #[serde(default)]
    pub supports_synthesize_streaming: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HandleModel {
    #[serde(flatten)]
    pub artifact: Artifact,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HandleProgram {
    #[serde(flatten)]
    pub artifact: Artifact,
    #[serde(default)]
    pub models: Vec<HandleModel>,
    #[serde(default)]
    pub supports_handled_streaming: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IntentModel {
    #[serde(flatten)]
    pub artifact: Artifact,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IntentProgram {
    #[serde(flatten)]
    pub artifact: Artifact,
    #[serde(default)]
    pub models: Vec<IntentModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WakeModel {
    #[serde(flatten)]
    pub artifact: Artifact,
    #[serde(default)]
    pub languages: Vec<String>,
    /// Phrase spoken to trigger the model, e.g. "okay nabu".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrase: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WakeProgram {
    #[serde(flatten)]
    pub artifact: Artifact,
    #[serde(default)]
    pub models: Vec<WakeModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MicProgram {
    #[serde(flatten)]
    pub artifact: Artifact,
    pub mic_format: AudioFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SndProgram {
    #[serde(flatten)]
    pub artifact: Artifact,
    pub snd_format: AudioFormat,
}

/// A remote device with a microphone and/or speaker.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Satellite {
    #[serde(flatten)]
    pub artifact: Artifact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Whether the satellite runs its own voice activity detection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_vad: Option<bool>,
    #[serde(default)]
    pub active_wake_words: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_active_wake_words: Option<u32>,
    /// Whether the satellite can be started remotely.
    #[serde(default)]
    pub supports_trigger: bool,
}

/// `info` event: what a service provides.
///
/// Empty lists are left off the wire and read back as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Info {
    pub asr: Vec<AsrProgram>,
    pub tts: Vec<TtsProgram>,
    pub handle: Vec<HandleProgram>,
    pub intent: Vec<IntentProgram>,
    pub wake: Vec<WakeProgram>,
    pub mic: Vec<MicProgram>,
    pub snd: Vec<SndProgram>,
    pub satellite: Option<Satellite>,
}

impl Info {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asr(mut self, program: AsrProgram) -> Self {
        self.asr.push(program);
        self
    }

    pub fn with_tts(mut self, program: TtsProgram) -> Self {
        self.tts.push(program);
        self
    }

    pub fn with_handle(mut self, program: HandleProgram) -> Self {
        self.handle.push(program);
        self
    }

    pub fn with_intent(mut self, program: IntentProgram) -> Self {
        self.intent.push(program);
        self
    }

    pub fn with_wake(mut self, program: WakeProgram) -> Self {
        self.wake.push(program);
        self
    }

    pub fn with_mic(mut self, program: MicProgram) -> Self {
        self.mic.push(program);
        self
    }

    pub fn with_snd(mut self, program: SndProgram) -> Self {
        self.snd.push(program);
        self
    }

    pub fn with_satellite(mut self, satellite: Satellite) -> Self {
        self.satellite = Some(satellite);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Eventable for Info {
    const TYPE: &'static str = "info";

    fn event(&self) -> Event {
        DataBuilder::new()
            .list("asr", &self.asr)
            .list("tts", &self.tts)
            .list("handle", &self.handle)
            .list("intent", &self.intent)
            .list("wake", &self.wake)
            .list("mic", &self.mic)
            .list("snd", &self.snd)
            .optional("satellite", self.satellite.as_ref())
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            asr: data.or_default("asr")?,
            tts: data.or_default("tts")?,
            handle: data.or_default("handle")?,
            intent: data.or_default("intent")?,
            wake: data.or_default("wake")?,
            mic: data.or_default("mic")?,
            snd: data.or_default("snd")?,
            satellite: data.optional("satellite")?,
        })
    }
}
