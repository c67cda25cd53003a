/// Returned when an envelope is built with an empty event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("event type must not be empty")]
pub struct InvalidEvent;

/// Why a single field could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeErrorKind {
    #[error("field is missing")]
    Missing,
    #[error("field is malformed: {0}")]
    Malformed(String),
}

/// A required field was absent, or a present field had the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to decode `{variant}` event, `{field}`: {kind}")]
pub struct DecodeError {
    /// Event type that was being decoded.
    pub variant: &'static str,
    /// Key inside the event data.
    pub field: &'static str,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    pub(crate) fn missing(variant: &'static str, field: &'static str) -> Self {
        Self {
            variant,
            field,
            kind: DecodeErrorKind::Missing,
        }
    }

    pub(crate) fn malformed(variant: &'static str, field: &'static str, reason: String) -> Self {
        Self {
            variant,
            field,
            kind: DecodeErrorKind::Malformed(reason),
        }
    }

    pub fn is_missing(&self) -> bool {
        self.kind == DecodeErrorKind::Missing
    }
}

/// Failure to turn an untyped envelope into a typed message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("unknown event type: {tag}")]
    UnknownType { tag: String },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Two event types were registered under the same tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("event type registered twice: {tag}")]
pub struct DuplicateTypeError {
    pub tag: &'static str,
}
