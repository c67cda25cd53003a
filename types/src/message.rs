use crate::errors::{DispatchError, DuplicateTypeError};
use crate::registry::Registry;
use crate::{
    Event, Eventable, asr, audio, error, handle, info, intent, media, ping, pipeline, satellite,
    snd, timer, tts, vad, wake,
};

macro_rules! messages {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        /// Any event of the protocol, as a typed value.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Message {
            $($variant($ty),)+
        }

        impl Message {
            pub fn event(&self) -> Event {
                match self {
                    $(Message::$variant(inner) => inner.event(),)+
                }
            }

            pub fn event_type(&self) -> &'static str {
                match self {
                    $(Message::$variant(_) => <$ty as Eventable>::TYPE,)+
                }
            }

            pub(crate) fn register_all(registry: &mut Registry<Message>) -> Result<(), DuplicateTypeError> {
                $(registry.register::<$ty>()?;)+
                Ok(())
            }
        }

        $(
            impl From<$ty> for Message {
                fn from(value: $ty) -> Self {
                    Message::$variant(value)
                }
            }
        )+

        /// Decodes without a registry, trying every event type in turn.
        impl TryFrom<Event> for Message {
            type Error = DispatchError;

            fn try_from(event: Event) -> Result<Self, DispatchError> {
                $(
                    if <$ty as Eventable>::is_type(event.event_type()) {
                        return Ok(Message::$variant(<$ty as Eventable>::from_event(event)?));
                    }
                )+
                Err(DispatchError::UnknownType {
                    tag: event.event_type().to_string(),
                })
            }
        }
    };
}

messages! {
    Describe(info::Describe),
    Info(info::Info),

    AudioStart(audio::AudioStart),
    AudioChunk(audio::AudioChunk),
    AudioStop(audio::AudioStop),

    VoiceStarted(vad::VoiceStarted),
    VoiceStopped(vad::VoiceStopped),

    Detect(wake::Detect),
    Detection(wake::Detection),
    NotDetected(wake::NotDetected),

    Transcribe(asr::Transcribe),
    Transcript(asr::Transcript),
    TranscriptStart(asr::TranscriptStart),
    TranscriptChunk(asr::TranscriptChunk),
    TranscriptStop(asr::TranscriptStop),

    Recognize(intent::Recognize),
    Intent(intent::Intent),
    NotRecognized(intent::NotRecognized),

    Handled(handle::Handled),
    HandledStart(handle::HandledStart),
    HandledChunk(handle::HandledChunk),
    HandledStop(handle::HandledStop),
    NotHandled(handle::NotHandled),

    Synthesize(tts::Synthesize),
    SynthesizeStart(tts::SynthesizeStart),
    SynthesizeChunk(tts::SynthesizeChunk),
    SynthesizeStop(tts::SynthesizeStop),
    SynthesizeStopped(tts::SynthesizeStopped),

    TimerStarted(timer::TimerStarted),
    TimerUpdated(timer::TimerUpdated),
    TimerFinished(timer::TimerFinished),
    TimerCancelled(timer::TimerCancelled),

    Played(snd::Played),

    RunSatellite(satellite::RunSatellite),
    PauseSatellite(satellite::PauseSatellite),
    StreamingStarted(satellite::StreamingStarted),
    StreamingStopped(satellite::StreamingStopped),
    SatelliteConnected(satellite::SatelliteConnected),
    SatelliteDisconnected(satellite::SatelliteDisconnected),

    Error(error::Error),
    Ping(ping::Ping),
    Pong(ping::Pong),
    RunPipeline(pipeline::RunPipeline),

    MediaPlay(media::MediaPlay),
    MediaStop(media::MediaStop),
    MediaPause(media::MediaPause),
    MediaUnpause(media::MediaUnpause),
}
