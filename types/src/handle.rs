//! Intent handling.

use crate::eventable::{Data, DataBuilder, unit_eventable};
use crate::{Context, DecodeError, Event, Eventable};

/// `handled` event: the intent was handled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Handled {
    /// Response to speak back to the user.
    pub text: Option<String>,
    pub context: Context,
}

impl Handled {
    pub fn new(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            context: Context::new(),
        }
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }
}

impl Eventable for Handled {
    const TYPE: &'static str = "handled";

    fn event(&self) -> Event {
        DataBuilder::new()
            .optional("text", self.text.as_ref())
            .context(&self.context)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            text: data.optional("text")?,
            context: data.context()?,
        })
    }
}

/// `handled-start` event: a streaming response begins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandledStart {
    pub context: Context,
}

impl Eventable for HandledStart {
    const TYPE: &'static str = "handled-start";

    fn event(&self) -> Event {
        DataBuilder::new()
            .context(&self.context)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            context: data.context()?,
        })
    }
}

/// `handled-chunk` event: a piece of a streaming response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandledChunk {
    pub text: String,
}

impl HandledChunk {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl Eventable for HandledChunk {
    const TYPE: &'static str = "handled-chunk";

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
    /// `handled-stop` event: the streaming response is complete.
    HandledStop => "handled-stop"
}

/// `not-handled` event: the intent could not be handled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotHandled {
    pub text: Option<String>,
    pub context: Context,
}

impl NotHandled {
    pub fn new(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            context: Context::new(),
        }
    }
}

impl Eventable for NotHandled {
    const TYPE: &'static str = "not-handled";

    fn event(&self) -> Event {
        DataBuilder::new()
            .optional("text", self.text.as_ref())
            .context(&self.context)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            text: data.optional("text")?,
            context: data.context()?,
        })
    }
}
