//! Liveness checks.

use crate::eventable::{Data, DataBuilder};
use crate::{DecodeError, Event, Eventable};

/// `ping` event. The peer answers with a [`Pong`] echoing `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ping {
    pub text: Option<String>,
}

impl Ping {
    pub fn new(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    pub fn pong(&self) -> Pong {
        Pong {
            text: self.text.clone(),
        }
    }
}

impl Eventable for Ping {
    const TYPE: &'static str = "ping";

    fn event(&self) -> Event {
        DataBuilder::new()
            .optional("text", self.text.as_ref())
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            text: data.optional("text")?,
        })
    }
}

/// `pong` event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pong {
    pub text: Option<String>,
}

impl Eventable for Pong {
    const TYPE: &'static str = "pong";

    fn event(&self) -> Event {
        DataBuilder::new()
            .optional("text", self.text.as_ref())
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            text: data.optional("text")?,
        })
    }
}
