use tracing::{debug, warn};

use super::dto::{TelemetryEvent, TelemetryResponse};

const MAX_DURATION_MS: f64 = 5_000.0;
const EVENT_PREFIX: &str = "infyfit";

/// Collector-side guardrails for incoming spans.
#[derive(Debug, Clone, Default)]
pub struct TelemetryIngest;

impl TelemetryIngest {
    pub fn ingest(&self, event: &TelemetryEvent) -> TelemetryResponse {
        if event.duration_ms > MAX_DURATION_MS {
            warn!(event = %event.event_name, duration_ms = event.duration_ms, "span too long");
            return TelemetryResponse { accepted: false };
        }
        if !event.event_name.starts_with(EVENT_PREFIX) {
            warn!(event = %event.event_name, "foreign span name");
            return TelemetryResponse { accepted: false };
        }
        debug!(
            event = %event.event_name,
            success = event.success,
            metadata_keys = event.metadata.len(),
            "span accepted"
        );
        TelemetryResponse { accepted: true }
    }
}
