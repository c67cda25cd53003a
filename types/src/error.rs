//! Errors reported by the other side of a connection.

use crate::eventable::{Data, DataBuilder};
use crate::{DecodeError, Event, Eventable};

/// `error` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// Human-readable description.
    pub text: String,
    /// Machine-readable code.
    pub code: Option<String>,
}

impl Error {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.code = Some(code.to_string());
        self
    }
}

impl Eventable for Error {
    const TYPE: &'static str = "error";

    fn event(&self) -> Event {
        DataBuilder::new()
            .field("text", &self.text)
            .optional("code", self.code.as_ref())
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            text: data.required("text")?,
            code: data.optional("code")?,
        })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.text, code),
            None => f.write_str(&self.text),
        }
    }
}
