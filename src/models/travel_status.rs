use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use super::TrainListing;
use crate::time::to_iso_midnight;

/// A user's single declaration of the train they are travelling on.
///
/// Stored on the backend user record; writing a new one replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelStatus {
    pub is_active: bool,
    #[serde(deserialize_with = "string_or_null")]
    pub boarding_station: String,
    #[serde(deserialize_with = "string_or_null")]
    pub destination_station: String,
    #[serde(deserialize_with = "string_or_null")]
    pub train_number: String,
    /// ISO timestamp; `None` once the status has been cleared
    pub travel_date: Option<String>,
    #[serde(deserialize_with = "string_or_null")]
    pub preferred_class: String,
}

impl TravelStatus {
    /// The record written when a user unlists themselves
    #[must_use]
    pub fn cleared() -> Self {
        Self::default()
    }

    /// The record written when a user lists themselves on `train`
    #[must_use]
    pub fn listing(train: &TrainListing, travel_date: NaiveDate, preferred_class: &str) -> Self {
        Self {
            is_active: true,
            boarding_station: train.from_station.code.clone(),
            destination_station: train.to_station.code.clone(),
            train_number: train.train_number.clone(),
            travel_date: Some(to_iso_midnight(travel_date)),
            preferred_class: preferred_class.to_string(),
        }
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Station;
    use serde_json::json;

    #[test]
    fn test_cleared_wire_format() {
        let value = serde_json::to_value(TravelStatus::cleared()).expect("should serialize");
        assert_eq!(
            value,
            json!({
                "isActive": false,
                "boardingStation": "",
                "destinationStation": "",
                "trainNumber": "",
                "travelDate": null,
                "preferredClass": ""
            })
        );
    }

    #[test]
    fn test_listing_wire_format() {
        let train = TrainListing {
            train_number: "12951".to_string(),
            from_station: Station { code: "MMCT".to_string(), name: String::new() },
            to_station: Station { code: "NDLS".to_string(), name: String::new() },
            ..TrainListing::default()
        };
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date");
        let value = serde_json::to_value(TravelStatus::listing(&train, date, "3A")).expect("should serialize");
        assert_eq!(
            value,
            json!({
                "isActive": true,
                "boardingStation": "MMCT",
                "destinationStation": "NDLS",
                "trainNumber": "12951",
                "travelDate": "2024-03-05T00:00:00.000Z",
                "preferredClass": "3A"
            })
        );
    }

    #[test]
    fn test_nulls_from_backend() {
        let json = r#"{"isActive": false, "boardingStation": null, "trainNumber": 12951, "travelDate": null}"#;
        let status: TravelStatus = serde_json::from_str(json).expect("should parse");
        assert!(!status.is_active);
        assert_eq!(status.boarding_station, "");
        assert_eq!(status.train_number, "12951");
        assert_eq!(status.travel_date, None);
        assert_eq!(status.preferred_class, "");
    }
}
