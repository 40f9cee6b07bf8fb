use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionDto {
    pub predicted_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecordDto {
    pub id: i64,
    pub days_ahead: i32,
    pub predicted_price: f64,
    pub created_at: String, // ISO timestamp as sent by the service
}

/// Result of a prediction request as seen by the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PredictOutcome {
    Predicted(PredictionDto),
    Failed { error: Option<String> },
}

/// Body the Prediction Service sends alongside a non-2xx status.
/// Anything else in the body (e.g. `detail`) is not shown to the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

pub fn extract_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_is_the_message() {
        let body = br#"{"error":"model unavailable","detail":"Prediction failed"}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("model unavailable")
        );
    }

    #[test]
    fn detail_without_error_has_no_message() {
        assert_eq!(extract_error_message(br#"{"detail":"Days must be > 0"}"#), None);
        let body = br#"{"detail":[{"loc":["query","days"],"msg":"value is not a valid integer"}]}"#;
        assert_eq!(extract_error_message(body), None);
        assert_eq!(extract_error_message(br#"{"error":""}"#), None);
    }

    #[test]
    fn unparseable_body_has_no_message() {
        assert_eq!(extract_error_message(b"<html>502 Bad Gateway</html>"), None);
        assert_eq!(extract_error_message(b""), None);
        assert_eq!(extract_error_message(b"[]"), None);
    }

    #[test]
    fn prediction_ignores_echoed_fields() {
        let minimal: PredictionDto = serde_json::from_str(r#"{"predicted_price":123.45}"#).unwrap();
        assert_eq!(minimal.predicted_price, 123.45);

        let full: PredictionDto =
            serde_json::from_str(r#"{"days_ahead":7,"predicted_price":99.5,"saved":true}"#).unwrap();
        assert_eq!(full, PredictionDto { predicted_price: 99.5 });
    }

    #[test]
    fn history_record_ignores_extra_fields() {
        let rec: HistoryRecordDto = serde_json::from_str(
            r#"{"id":3,"days_ahead":5,"predicted_price":101.25,"created_at":"2024-05-01T10:20:30.123456","extra":1}"#,
        )
        .unwrap();
        assert_eq!(rec.id, 3);
        assert_eq!(rec.created_at, "2024-05-01T10:20:30.123456");
    }
}
