use chrono::NaiveDate;
use crate::api::UserApi;
use crate::log;
use crate::models::{TrainListing, TravelStatus};
use crate::time::{parse_calendar_date, parse_train_date};

/// Result of comparing the stored travel status against one train
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    NotListed,
    Listed { preferred_class: Option<String> },
}

/// True when an active travel status names this train, route and day.
///
/// Days are compared as calendar dates; the time of day of either side is
/// ignored. A train date that cannot be read never matches.
#[must_use]
pub fn matches_train(status: &TravelStatus, train: &TrainListing, today: NaiveDate) -> bool {
    if !status.is_active
        || status.boarding_station != train.from_station.code
        || status.destination_station != train.to_station.code
        || status.train_number != train.train_number
    {
        return false;
    }

    let Some(travel_day) = status.travel_date.as_deref().and_then(parse_calendar_date) else {
        return false;
    };

    match parse_train_date(train.train_date.as_deref(), today) {
        Ok(train_day) => train_day == travel_day,
        Err(e) => {
            leptos::logging::warn!("Not matching travel status against train {}: {e}", train.train_number);
            false
        }
    }
}

#[must_use]
pub fn reconcile(status: Option<&TravelStatus>, train: &TrainListing, today: NaiveDate) -> Reconciliation {
    match status {
        Some(status) if matches_train(status, train, today) => Reconciliation::Listed {
            preferred_class: Some(status.preferred_class.clone()).filter(|c| !c.is_empty()),
        },
        _ => Reconciliation::NotListed,
    }
}

/// Look up the signed-in user's travel status and reconcile it with `train`.
///
/// Without a token nothing is requested. Failures are logged and treated as
/// "not listed" since the card works without this information.
pub async fn check_listing<A: UserApi>(
    api: &A,
    token: Option<&str>,
    train: &TrainListing,
    today: NaiveDate,
) -> Reconciliation {
    let Some(token) = token else {
        return Reconciliation::NotListed;
    };

    match api.current_user(token).await {
        Ok(response) if response.success => {
            let status = response.user.as_ref().and_then(|u| u.travel_status.as_ref());
            let reconciliation = reconcile(status, train, today);
            log!("Travel status for train {}: {:?}", train.train_number, reconciliation);
            reconciliation
        }
        Ok(_) => {
            log!("User lookup was not successful, train {} shown as not listed", train.train_number);
            Reconciliation::NotListed
        }
        Err(e) => {
            leptos::logging::error!("Error checking user listing: {e}");
            Reconciliation::NotListed
        }
    }
}
