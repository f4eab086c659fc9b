use time::{Duration, OffsetDateTime};
use tracing::info;

use super::dto::{PrivacyIntent, PrivacyRequest, PrivacyResponse};

const EXPORT_WINDOW: Duration = Duration::hours(24);
const DELETE_WINDOW: Duration = Duration::days(30);

/// Export and delete flows.
#[derive(Debug, Clone, Default)]
pub struct PrivacyOps;

impl PrivacyOps {
    pub fn handle(&self, request: &PrivacyRequest) -> PrivacyResponse {
        self.handle_at(request, OffsetDateTime::now_utc())
    }

    pub fn handle_at(&self, request: &PrivacyRequest, now: OffsetDateTime) -> PrivacyResponse {
        info!(intent = ?request.intent, user_id = %request.user_id, "privacy request");
        match request.intent {
            PrivacyIntent::Export => PrivacyResponse {
                message: format!(
                    "Export for {} scheduled. We'll email you when it's ready.",
                    request.user_id
                ),
                expires_at: Some(now + EXPORT_WINDOW),
            },
            PrivacyIntent::Delete => PrivacyResponse {
                message: "Account deletion window started. Sign in within 30 days to cancel."
                    .into(),
                expires_at: Some(now + DELETE_WINDOW),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn request(intent: PrivacyIntent) -> PrivacyRequest {
        PrivacyRequest {
            user_id: "user-123".into(),
            intent,
        }
    }

    #[test]
    fn export_expires_in_a_day() {
        let now = datetime!(2026-10-18 09:30 UTC);
        let resp = PrivacyOps.handle_at(&request(PrivacyIntent::Export), now);
        assert_eq!(resp.expires_at, Some(datetime!(2026-10-19 09:30 UTC)));
        assert!(resp.message.contains("user-123"));
    }

    #[test]
    fn delete_expires_in_thirty_days() {
        let now = datetime!(2026-10-18 09:30 UTC);
        let resp = PrivacyOps.handle_at(&request(PrivacyIntent::Delete), now);
        assert_eq!(resp.expires_at, Some(datetime!(2026-11-17 09:30 UTC)));
        assert_eq!(
            resp.message,
            "Account deletion window started. Sign in within 30 days to cancel."
        );
    }

    #[test]
    fn wall_clock_expiry_is_close_to_now() {
        let before = OffsetDateTime::now_utc();
        let resp = PrivacyOps.handle(&request(PrivacyIntent::Delete));
        let expires = resp.expires_at.expect("delete sets expiry");
        let delta = expires - before - DELETE_WINDOW;
        assert!(delta >= Duration::ZERO && delta < Duration::seconds(5));
    }
}
