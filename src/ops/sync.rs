use tracing::debug;

use super::dto::{OfflineSyncRequest, OfflineSyncResult};

const ITEMS_PER_BATCH: u32 = 5;
const MAX_BATCHES: u32 = 5;
const MS_PER_BATCH: u32 = 150;
const RETRY_AFTER_S: u32 = 30;

/// Flushes the offline queue only when the whole flush fits the latency budget.
#[derive(Debug, Clone, Default)]
pub struct OfflineSync;

impl OfflineSync {
    pub fn flush(&self, request: &OfflineSyncRequest) -> OfflineSyncResult {
        if request.queue_size == 0 {
            return OfflineSyncResult {
                flushed: true,
                batches_uploaded: 0,
                next_retry_s: None,
            };
        }

        let batches = (request.queue_size / ITEMS_PER_BATCH).clamp(1, MAX_BATCHES);
        let meets_budget = i64::from(batches * MS_PER_BATCH) <= request.latency_budget_ms;
        debug!(batches, meets_budget, budget_ms = request.latency_budget_ms, "offline flush");

        if meets_budget {
            OfflineSyncResult {
                flushed: true,
                batches_uploaded: batches,
                next_retry_s: None,
            }
        } else {
            OfflineSyncResult {
                flushed: false,
                batches_uploaded: 0,
                next_retry_s: Some(RETRY_AFTER_S),
            }
        }
    }
}
