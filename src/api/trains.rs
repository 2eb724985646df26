use chrono::NaiveDate;
use serde::Deserialize;
use super::{decode_json, ApiConfig, ApiError};
use crate::constants::TRAIN_SEARCH_PATH;
use crate::models::TrainListing;

/// Stations and day to search trains for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainSearchQuery {
    pub from: String,
    pub to: String,
    pub date: NaiveDate,
}

impl TrainSearchQuery {
    /// Query string pairs; the backend takes dates day-first like it returns them
    #[must_use]
    pub fn params(&self) -> [(&'static str, String); 3] {
        [
            ("from", self.from.trim().to_uppercase()),
            ("to", self.to.trim().to_uppercase()),
            ("date", self.date.format("%d-%m-%Y").to_string()),
        ]
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TrainSearchResponse {
    success: bool,
    data: Vec<TrainListing>,
    message: Option<String>,
}

/// Fetch trains running between two stations on a given day
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP request fails
/// - The response status is not ok, or the body reports `success: false`
/// - The response body cannot be deserialized
pub async fn search_trains(config: &ApiConfig, query: &TrainSearchQuery) -> Result<Vec<TrainListing>, ApiError> {
    let response = reqwest::Client::new()
        .get(config.url(TRAIN_SEARCH_PATH))
        .query(&query.params())
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let body: TrainSearchResponse = decode_json(response).await?;
    if !body.success {
        return Err(ApiError::Http { status: 200, message: body.message });
    }
    Ok(body.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params() {
        let query = TrainSearchQuery {
            from: " mmct".to_string(),
            to: "ndls ".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date"),
        };
        assert_eq!(
            query.params(),
            [
                ("from", "MMCT".to_string()),
                ("to", "NDLS".to_string()),
                ("date", "05-03-2024".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_response_normalises_both_shapes() {
        let json = r#"{"success": true, "data": [
            {"trainNumber": "12951", "fromStation": {"code": "MMCT"}},
            {"train_number": "12953", "from": "MMCT"}
        ]}"#;
        let body: TrainSearchResponse = serde_json::from_str(json).expect("should parse");
        assert_eq!(body.data.len(), 2);
        assert!(body.data.iter().all(|t| t.from_station.code == "MMCT"));
    }
}
