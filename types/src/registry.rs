use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use crate::errors::{DecodeError, DispatchError, DuplicateTypeError};
use crate::{Event, Eventable, Message};

type DecodeFn<M> = fn(Event) -> Result<M, DecodeError>;

fn decode_as<T, M>(event: Event) -> Result<M, DecodeError>
where
    T: Eventable + Into<M>,
{
    T::from_event(event).map(Into::into)
}

/// Maps event types to the decoder of their concrete variant.
///
/// Build it once at startup and share it read-only; lookups are a single hash
/// probe. `M` is the sum type decoded into, so applications with their own
/// event types can register them into their own enum.
pub struct Registry<M = Message> {
    decoders: HashMap<&'static str, DecodeFn<M>>,
}

impl<M> Registry<M> {
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Registers `T` under [`Eventable::TYPE`]. A tag may only be registered once.
    pub fn register<T>(&mut self) -> Result<&mut Self, DuplicateTypeError>
    where
        T: Eventable + Into<M>,
    {
        match self.decoders.entry(T::TYPE) {
            Entry::Occupied(_) => Err(DuplicateTypeError { tag: T::TYPE }),
            Entry::Vacant(slot) => {
                slot.insert(decode_as::<T, M>);
                Ok(self)
            }
        }
    }

    pub fn decode(&self, event: Event) -> Result<M, DispatchError> {
        let decode = self
            .decoders
            .get(event.event_type())
            .copied()
            .ok_or_else(|| DispatchError::UnknownType {
                tag: event.event_type().to_string(),
            })?;
        Ok(decode(event)?)
    }

    pub fn contains(&self, event_type: &str) -> bool {
        self.decoders.contains_key(event_type)
    }

    /// Registered event types, in no particular order.
    pub fn types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.decoders.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

impl Registry<Message> {
    /// A registry holding every event type of the protocol.
    pub fn builtin() -> Result<Self, DuplicateTypeError> {
        let mut registry = Self::new();
        Message::register_all(&mut registry)?;
        Ok(registry)
    }
}

impl<M> Default for Registry<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for Registry<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<_> = self.types().collect();
        types.sort_unstable();
        f.debug_struct("Registry").field("types", &types).finish()
    }
}
