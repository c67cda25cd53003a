//! Timers created by intent handlers.

use crate::eventable::{Data, DataBuilder};
use crate::{DecodeError, Event, Eventable};

/// Command to run when a timer finishes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimerCommand {
    /// Text to process as if it were spoken.
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl TimerCommand {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            language: None,
        }
    }
}

/// `timer-started` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerStarted {
    pub id: String,
    pub total_seconds: u32,
    /// Name given by the user, e.g. "pizza".
    pub name: Option<String>,
    pub start_hours: Option<u32>,
    pub start_minutes: Option<u32>,
    pub start_seconds: Option<u32>,
    pub command: Option<TimerCommand>,
}

impl TimerStarted {
    pub fn new(id: &str, total_seconds: u32) -> Self {
        Self {
            id: id.to_string(),
            total_seconds,
            name: None,
            start_hours: None,
            start_minutes: None,
            start_seconds: None,
            command: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Records the duration as the user said it.
    pub fn with_start(mut self, hours: u32, minutes: u32, seconds: u32) -> Self {
        self.start_hours = Some(hours);
        self.start_minutes = Some(minutes);
        self.start_seconds = Some(seconds);
        self
    }

    pub fn with_command(mut self, command: TimerCommand) -> Self {
        self.command = Some(command);
        self
    }
}

impl Eventable for TimerStarted {
    const TYPE: &'static str = "timer-started";

    fn event(&self) -> Event {
        DataBuilder::new()
            .field("id", &self.id)
            .field("total_seconds", self.total_seconds)
            .optional("name", self.name.as_ref())
            .optional("start_hours", self.start_hours)
            .optional("start_minutes", self.start_minutes)
            .optional("start_seconds", self.start_seconds)
            .optional("command", self.command.as_ref())
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            id: data.required("id")?,
            total_seconds: data.required("total_seconds")?,
            name: data.optional("name")?,
            start_hours: data.optional("start_hours")?,
            start_minutes: data.optional("start_minutes")?,
            start_seconds: data.optional("start_seconds")?,
            command: data.optional("command")?,
        })
    }
}

/// `timer-updated` event: a timer was paused, resumed or changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerUpdated {
    pub id: String,
    pub is_active: bool,
    /// Seconds remaining.
    pub total_seconds: u32,
}

impl TimerUpdated {
    pub fn new(id: &str, is_active: bool, total_seconds: u32) -> Self {
        Self {
            id: id.to_string(),
            is_active,
            total_seconds,
        }
    }
}

impl Eventable for TimerUpdated {
    const TYPE: &'static str = "timer-updated";

    fn event(&self) -> Event {
        DataBuilder::new()
            .field("id", &self.id)
            .field("is_active", self.is_active)
            .field("total_seconds", self.total_seconds)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            id: data.required("id")?,
            is_active: data.required("is_active")?,
            total_seconds: data.required("total_seconds")?,
        })
    }
}

/// `timer-finished` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerFinished {
    pub id: String,
}

impl TimerFinished {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

impl Eventable for TimerFinished {
    const TYPE: &'static str = "timer-finished";

    fn event(&self) -> Event {
        DataBuilder::new()
            .field("id", &self.id)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            id: data.required("id")?,
        })
    }
}

/// `timer-cancelled` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerCancelled {
    pub id: String,
}

impl TimerCancelled {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

impl Eventable for TimerCancelled {
    const TYPE: &'static str = "timer-cancelled";

    fn event(&self) -> Event {
        DataBuilder::new()
            .field("id", &self.id)
            .into_event(Self::TYPE)
    }

    fn from_event(event: Event) -> Result<Self, DecodeError> {
        let data = Data::new(Self::TYPE, &event);
        Ok(Self {
            id: data.required("id")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_started_with_everything() {
        let started = TimerStarted::new("test-id", 330)
            .with_name("pizza")
            .with_start(0, 5, 30)
            .with_command(TimerCommand::new("turn off the oven"));

        let event = started.event();
        assert_eq!(event.get_field("command"), Some(&json!({"text": "turn off the oven"})));
        assert_eq!(TimerStarted::from_event(event).unwrap(), started);
    }

    #[test]
    fn test_updated_keeps_inactive_flag() {
        let paused = TimerUpdated::new("test-id", false, 100);
        let event = paused.event();
        assert_eq!(event.get_field("is_active"), Some(&json!(false)));
        assert_eq!(TimerUpdated::from_event(event).unwrap(), paused);
    }

    #[test]
    fn test_negative_seconds_are_malformed() {
        let data = json!({"id": "test-id", "total_seconds": -5});
        let event = Event::new(TimerStarted::TYPE, data.as_object().cloned(), None).unwrap();
        let err = TimerStarted::from_event(event).unwrap_err();
        assert_eq!(err.field, "total_seconds");
        assert!(!err.is_missing());
    }
}
