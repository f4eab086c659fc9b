use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::ApiError;

/// JSON body extractor that treats a missing, empty or `null` body as `{}`
/// and reports every parse failure as a 400 with a `detail` message.
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadPayload(e.body_text()))?;
        parse_body(&bytes).map(Payload)
    }
}

fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let value = if bytes.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice::<Value>(bytes).map_err(|e| {
            warn!(error = %e, "malformed json body");
            ApiError::BadPayload(format!("Invalid JSON body: {e}"))
        })?
    };
    let value = match value {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(value).map_err(|e| {
        warn!(error = %e, "payload rejected");
        ApiError::BadPayload(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default)]
        count: u32,
    }

    #[test]
    fn empty_and_null_bodies_fall_back_to_defaults() {
        let empty: Sample = parse_body(b"").unwrap();
        assert_eq!(empty.count, 0);
        let null: Sample = parse_body(b" null ").unwrap();
        assert_eq!(null.count, 0);
    }

    #[test]
    fn type_mismatch_is_bad_payload() {
        let err = parse_body::<Sample>(br#"{"count": "many"}"#).unwrap_err();
        assert!(matches!(err, ApiError::BadPayload(_)));
    }

    #[test]
    fn broken_json_is_bad_payload() {
        let err = parse_body::<Sample>(b"{").unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON body"));
    }
}
