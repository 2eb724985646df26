use serde::{Deserialize, Deserializer};
use crate::constants::DEFAULT_TRAVEL_CLASSES;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Station {
    pub code: String,
    pub name: String,
}

/// A train as shown on a search result card.
///
/// Search results arrive in two shapes: nested camelCase (`trainNumber`,
/// `fromStation: {code, name}`) and flattened snake case (`train_number`,
/// `from`, `from_station_name`). Both deserialize into this one type; when a
/// field is present in both shapes the camelCase value wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawTrainListing")]
pub struct TrainListing {
    pub train_number: String,
    pub train_name: String,
    pub from_station: Station,
    pub to_station: Station,
    pub departure_time: String,
    pub arrival_time: String,
    /// As received, usually `DD-MM-YYYY`; see [`crate::time::parse_train_date`]
    pub train_date: Option<String>,
    pub duration_minutes: Option<u32>,
    pub distance_km: Option<u32>,
    pub available_classes: Vec<String>,
}

impl TrainListing {
    /// Classes the user may pick from, falling back to the usual set when the
    /// search result did not list any
    #[must_use]
    pub fn travel_classes(&self) -> Vec<String> {
        if self.available_classes.is_empty() {
            DEFAULT_TRAVEL_CLASSES.iter().map(|c| (*c).to_string()).collect()
        } else {
            self.available_classes.clone()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawStation {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTrainListing {
    #[serde(rename = "trainNumber", deserialize_with = "lenient_string")]
    train_number_camel: Option<String>,
    #[serde(rename = "train_number", deserialize_with = "lenient_string")]
    train_number_snake: Option<String>,
    #[serde(rename = "trainName")]
    train_name_camel: Option<String>,
    #[serde(rename = "train_name")]
    train_name_snake: Option<String>,

    #[serde(rename = "fromStation")]
    from_station: Option<RawStation>,
    from: Option<String>,
    from_station_name: Option<String>,
    #[serde(rename = "toStation")]
    to_station: Option<RawStation>,
    to: Option<String>,
    to_station_name: Option<String>,

    #[serde(rename = "departureTime")]
    departure_time: Option<String>,
    from_std: Option<String>,
    #[serde(rename = "arrivalTime")]
    arrival_time: Option<String>,
    to_sta: Option<String>,

    #[serde(rename = "train_date")]
    train_date_snake: Option<String>,
    #[serde(rename = "trainDate")]
    train_date_camel: Option<String>,

    #[serde(deserialize_with = "lenient_u32")]
    duration: Option<u32>,
    #[serde(deserialize_with = "lenient_u32")]
    distance: Option<u32>,

    #[serde(rename = "availableClasses")]
    available_classes: Option<Vec<String>>,
    class_type: Option<Vec<String>>,
}

/// First non-empty value wins
fn pick(primary: Option<String>, fallback: Option<String>) -> String {
    primary
        .filter(|s| !s.is_empty())
        .or(fallback)
        .unwrap_or_default()
}

impl From<RawTrainListing> for TrainListing {
    fn from(raw: RawTrainListing) -> Self {
        let from_station = raw.from_station.unwrap_or_default();
        let to_station = raw.to_station.unwrap_or_default();

        let train_date = Some(pick(raw.train_date_snake, raw.train_date_camel))
            .filter(|s| !s.is_empty());

        Self {
            train_number: pick(raw.train_number_camel, raw.train_number_snake),
            train_name: pick(raw.train_name_camel, raw.train_name_snake),
            from_station: Station {
                code: pick(from_station.code, raw.from),
                name: pick(from_station.name, raw.from_station_name),
            },
            to_station: Station {
                code: pick(to_station.code, raw.to),
                name: pick(to_station.name, raw.to_station_name),
            },
            departure_time: pick(raw.departure_time, raw.from_std),
            arrival_time: pick(raw.arrival_time, raw.to_sta),
            train_date,
            duration_minutes: raw.duration,
            distance_km: raw.distance,
            available_classes: raw
                .available_classes
                .filter(|c| !c.is_empty())
                .or(raw.class_type)
                .unwrap_or_default(),
        }
    }
}

/// Accepts a JSON string or number (train numbers are sometimes sent as numbers)
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Accepts a non-negative JSON number or a numeric string; anything else is treated as absent
fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
