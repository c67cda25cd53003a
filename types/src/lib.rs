//! Typed events of the wyoming voice-assistant protocol.
//!
//! Every message kind implements [`Eventable`]: it can be turned into a generic
//! [`Event`] envelope and rebuilt from one. A [`Registry`] maps event types back
//! to their concrete [`Message`] variant on the receiving side.

mod errors;
mod event;
mod eventable;
mod message;
mod registry;

pub mod asr;
pub mod audio;
pub mod error;
pub mod handle;
pub mod info;
pub mod intent;
pub mod media;
pub mod ping;
pub mod pipeline;
pub mod satellite;
pub mod snd;
pub mod timer;
pub mod tts;
pub mod vad;
pub mod wake;

//re-export types for easier access
pub use errors::{DecodeError, DecodeErrorKind, DispatchError, DuplicateTypeError, InvalidEvent};
pub use event::{Event, EventData};
pub use eventable::{Context, Eventable};
pub use intent::Entity;
pub use message::Message;
pub use pipeline::PipelineStage;
pub use registry::Registry;
pub use tts::Voice;
