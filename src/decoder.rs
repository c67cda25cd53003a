use std::sync::{Arc, Mutex, PoisonError};

use wyoming_types::{DispatchError, DuplicateTypeError, Event, Message, Registry};

use crate::config::{Config, UnknownTypePolicy};

mod stats;

pub use stats::Stats;

/// Turns envelopes received from a transport into typed messages.
///
/// The registry is shared read-only, so one decoder (or many clones of the
/// same registry) can serve every connection concurrently.
pub struct Decoder {
    registry: Arc<Registry>,
    unknown_types: UnknownTypePolicy,
    stats: Arc<Mutex<Stats>>,
}

impl Decoder {
    pub fn new(registry: Arc<Registry>, config: &Config) -> Self {
        Self {
            registry,
            unknown_types: config.unknown_types(),
            stats: Arc::new(Mutex::new(Stats::new())),
        }
    }

    /// A decoder over every event type of the protocol.
    pub fn builtin(config: &Config) -> Result<Self, DuplicateTypeError> {
        let registry = Registry::builtin()?;
        tracing::debug!("registered {} event types", registry.len());
        Ok(Self::new(Arc::new(registry), config))
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Decodes one event.
    ///
    /// Returns `Ok(None)` when the event type is unknown and the policy is to
    /// skip such events.
    pub fn decode(&self, event: Event) -> Result<Option<Message>, DispatchError> {
        match self.registry.decode(event) {
            Ok(message) => {
                tracing::debug!("decoded event: {}", message.event_type());
                self.update(Stats::record_decoded);
                Ok(Some(message))
            }
            Err(DispatchError::UnknownType { tag }) => match self.unknown_types {
                UnknownTypePolicy::Skip => {
                    tracing::debug!("skipping unknown event type: {}", tag);
                    self.update(Stats::record_skipped);
                    Ok(None)
                }
                UnknownTypePolicy::Error => {
                    tracing::warn!("unknown event type: {}", tag);
                    self.update(Stats::record_failed);
                    Err(DispatchError::UnknownType { tag })
                }
            },
            Err(e) => {
                tracing::warn!("failed to decode event: {}", e);
                self.update(Stats::record_failed);
                Err(e)
            }
        }
    }

    pub fn encode(&self, message: &Message) -> Event {
        tracing::trace!("encoding event: {}", message.event_type());
        message.event()
    }

    pub fn stats(&self) -> Stats {
        *self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, record: impl FnOnce(&mut Stats)) {
        let mut stats = self.stats.lock().unwrap_or_else(PoisonError::into_inner);
        record(&mut *stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wyoming_types::asr::Transcript;
    use wyoming_types::audio::AudioChunk;
    use wyoming_types::pipeline::{PipelineStage, RunPipeline};
    use wyoming_types::tts::{Synthesize, Voice};
    use wyoming_types::{Context, Eventable};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn decoder(policy: UnknownTypePolicy) -> Decoder {
        init_tracing();
        let config = Config::builder().with_unknown_types(policy).build();
        Decoder::builtin(&config).unwrap()
    }

    fn unknown() -> Event {
        Event::new("not-a-real-tag", None, None).unwrap()
    }

    #[test]
    fn test_skips_unknown_types() {
        let decoder = decoder(UnknownTypePolicy::Skip);
        assert_eq!(decoder.decode(unknown()), Ok(None));
        assert_eq!(decoder.stats().skipped(), 1);
        assert_eq!(decoder.stats().failed(), 0);
    }

    #[test]
    fn test_reports_unknown_types() {
        let decoder = decoder(UnknownTypePolicy::Error);
        assert_eq!(
            decoder.decode(unknown()),
            Err(DispatchError::UnknownType {
                tag: "not-a-real-tag".to_string()
            })
        );
        assert_eq!(decoder.stats().failed(), 1);
    }

    #[test]
    fn test_decode_errors_are_returned_under_any_policy() {
        let decoder = decoder(UnknownTypePolicy::Skip);
        let data = serde_json::json!({"start_stage": "bogus", "end_stage": "tts"});
        let event = Event::new(RunPipeline::TYPE, data.as_object().cloned(), None).unwrap();
        assert!(matches!(decoder.decode(event), Err(DispatchError::Decode(_))));
        assert_eq!(decoder.stats().failed(), 1);
        assert_eq!(decoder.stats().decoded(), 0);
    }

    #[test]
    fn test_encode_then_decode() -> anyhow::Result<()> {
        let decoder = decoder(UnknownTypePolicy::Error);
        let messages: Vec<Message> = vec![
            RunPipeline::new(PipelineStage::Asr, PipelineStage::Tts).into(),
            Synthesize::new("test text")
                .with_voice(Voice::new("test-name").with_speaker("test-speaker"))
                .with_context(Context::new())
                .into(),
            AudioChunk::new(22050, 2, 1, bytes::Bytes::from(vec![0u8; 100])).into(),
        ];

        for message in &messages {
            let event = decoder.encode(message);
            assert_eq!(decoder.decode(event)?.as_ref(), Some(message));
        }
        assert_eq!(decoder.stats().decoded(), messages.len() as u64);
        Ok(())
    }

    #[tokio::test]
    async fn test_shared_across_tasks() {
        let decoder = Arc::new(decoder(UnknownTypePolicy::Skip));

        let mut handles = Vec::new();
        for task in 0..8 {
            let decoder = decoder.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..50 {
                    let text = format!("task {} message {}", task, i);
                    let event = Transcript::new(&text).event();
                    match decoder.decode(event) {
                        Ok(Some(Message::Transcript(transcript))) => assert_eq!(transcript.text, text),
                        other => panic!("unexpected result: {:?}", other),
                    }
                    assert_eq!(decoder.decode(unknown()), Ok(None));
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let stats = decoder.stats();
        assert_eq!(stats.decoded(), 400);
        assert_eq!(stats.skipped(), 400);
        assert_eq!(stats.total(), 800);
    }
}
