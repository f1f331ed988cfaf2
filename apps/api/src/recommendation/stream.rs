//! SSE production for the streaming recommendation flow.
//!
//! Event protocol:
//! - `status` — user-facing progress message (analysis start + milestones)
//! - `snapshot` — a progressively more complete, always-valid document
//! - `complete` — terminal outcome: the typed document, live or sample
//! - final `data: [DONE]` sentinel

use std::convert::Infallible;
use std::pin::Pin;

use axum::response::sse::{Event, KeepAlive, Sse};
use futures_util::{Stream, StreamExt};
use serde_json::Value;
use tracing::warn;

use crate::llm_client::LlmError;
use crate::models::recommendation::DetailedRecommendation;
use crate::models::ResultSource;
use crate::recommendation::accumulator::RevealAccumulator;
use crate::recommendation::handlers::RecommendationResponse;
use crate::samples;

const START_MESSAGE: &str = "AI is analyzing your profile and the job market...";

pub type RecommendationSse =
    Sse<Pin<Box<dyn Stream<Item = Result<Event, Infallible>> + Send>>>;

/// One step of the reveal, before SSE framing.
#[derive(Debug)]
pub enum RevealEvent {
    Status(&'static str),
    Snapshot(Value),
    Complete(Box<RecommendationResponse>),
    Done,
}

/// Drives the fragment stream through one accumulator instance. Transport
/// errors and terminal parse failures both end in the sample fallback;
/// neither aborts the stream.
pub fn reveal_events(
    fragments: impl Stream<Item = Result<String, LlmError>> + Send + 'static,
) -> impl Stream<Item = RevealEvent> + Send + 'static {
    async_stream::stream! {
        let mut acc = RevealAccumulator::new();
        acc.start();

        yield RevealEvent::Status(START_MESSAGE);

        futures_util::pin_mut!(fragments);
        let mut transport_failed = false;

        while let Some(next) = fragments.next().await {
            match next {
                Ok(fragment) => {
                    if let Some(snapshot) = acc.ingest(&fragment) {
                        for milestone in &snapshot.newly_reached {
                            yield RevealEvent::Status(milestone.status_message());
                        }
                        yield RevealEvent::Snapshot(snapshot.value);
                    }
                }
                Err(e) => {
                    warn!("recommendation stream failed mid-flight: {e}");
                    transport_failed = true;
                    break;
                }
            }
        }

        let terminal = if transport_failed {
            None
        } else {
            match acc.finish() {
                Ok(value) => match serde_json::from_value::<DetailedRecommendation>(value) {
                    Ok(doc) => Some(doc),
                    Err(e) => {
                        warn!("terminal document failed validation: {e}");
                        None
                    }
                },
                Err(e) => {
                    warn!("stream ended without a parseable document: {e}");
                    None
                }
            }
        };

        let response = match terminal {
            Some(recommendation) => RecommendationResponse {
                recommendation,
                source: ResultSource::Live,
                note: None,
            },
            None => {
                warn!("substituting sample recommendation");
                RecommendationResponse {
                    recommendation: samples::sample_detailed_recommendation(),
                    source: ResultSource::Sample,
                    note: Some(samples::FALLBACK_NOTE.to_string()),
                }
            }
        };

        yield RevealEvent::Complete(Box::new(response));
        yield RevealEvent::Done;
    }
}

/// Renders the reveal as Server-Sent Events.
pub fn recommendation_sse(
    fragments: impl Stream<Item = Result<String, LlmError>> + Send + 'static,
) -> RecommendationSse {
    let events = reveal_events(fragments).map(|event| {
        Ok(match event {
            RevealEvent::Status(message) => Event::default().event("status").data(message),
            RevealEvent::Snapshot(value) => {
                Event::default().event("snapshot").data(value.to_string())
            }
            RevealEvent::Complete(response) => Event::default()
                .event("complete")
                .data(serde_json::to_string(&response).unwrap_or_default()),
            RevealEvent::Done => Event::default().data("[DONE]"),
        })
    });

    let events: Pin<Box<dyn Stream<Item = Result<Event, Infallible>> + Send>> = Box::pin(events);
    Sse::new(events).keep_alive(KeepAlive::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    fn ok(s: &str) -> Result<String, LlmError> {
        Ok(s.to_string())
    }

    async fn collect(parts: Vec<Result<String, LlmError>>) -> Vec<RevealEvent> {
        reveal_events(stream::iter(parts)).collect().await
    }

    fn statuses(events: &[RevealEvent]) -> Vec<&'static str> {
        events
            .iter()
            .filter_map(|e| match e {
                RevealEvent::Status(m) => Some(*m),
                _ => None,
            })
            .collect()
    }

    fn completion(events: &[RevealEvent]) -> &RecommendationResponse {
        events
            .iter()
            .find_map(|e| match e {
                RevealEvent::Complete(r) => Some(r.as_ref()),
                _ => None,
            })
            .expect("stream always completes")
    }

    #[tokio::test]
    async fn test_two_fragment_reveal_hits_milestones_and_completes_live() {
        let doc = concat!(
            "{\"summary\":\"ok\",\"careerPath\":[{\"title\":\"SDE\",\"duration\":\"Years 0-2\",",
            "\"summary\":\"ship\",\"skillsToMaster\":[],\"potentialSalary\":\"₹8-12 LPA\"}]}"
        );
        let events = collect(vec![ok(&doc[..20]), ok(&doc[20..])]).await;

        let seen = statuses(&events);
        assert_eq!(seen[0], START_MESSAGE);
        assert!(seen.contains(&"Crafting your career summary..."));
        assert!(seen.contains(&"Building your 5-10 year career timeline..."));

        let done = completion(&events);
        assert_eq!(done.source, ResultSource::Live);
        assert_eq!(done.recommendation.career_path.len(), 1);
        assert!(matches!(events.last(), Some(RevealEvent::Done)));
    }

    #[tokio::test]
    async fn test_snapshots_only_on_successful_parses() {
        let events = collect(vec![ok("{\"summary\":\"ok\""), ok(",\"careerPath\":[]}")]).await;
        let snapshot_count = events
            .iter()
            .filter(|e| matches!(e, RevealEvent::Snapshot(_)))
            .count();
        assert_eq!(snapshot_count, 1);
    }

    #[tokio::test]
    async fn test_unparseable_stream_falls_back_to_sample() {
        let events = collect(vec![ok("not json")]).await;
        assert!(!events.iter().any(|e| matches!(e, RevealEvent::Snapshot(_))));
        let done = completion(&events);
        assert_eq!(done.source, ResultSource::Sample);
        assert!(done.note.is_some());
    }

    #[tokio::test]
    async fn test_transport_error_falls_back_to_sample() {
        let events = collect(vec![
            ok("{\"summary\":\"ok\""),
            Err(LlmError::EmptyContent),
        ])
        .await;
        assert_eq!(completion(&events).source, ResultSource::Sample);
    }

    #[tokio::test]
    async fn test_empty_stream_falls_back_to_sample() {
        let events = collect(vec![]).await;
        assert_eq!(completion(&events).source, ResultSource::Sample);
    }

    #[tokio::test]
    async fn test_valid_json_missing_required_fields_falls_back() {
        // Parses fine but fails typed validation at the terminal snapshot.
        let events = collect(vec![ok("{\"a\":1}")]).await;
        assert_eq!(completion(&events).source, ResultSource::Sample);
    }
}
