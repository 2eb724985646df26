use super::{ListingError, PendingWrite, WriteKind};
use crate::api::UserApi;
use crate::log;

/// Send one travel-status write. No retries.
///
/// # Errors
///
/// [`ListingError::Rejected`] when the backend answers `success: false`,
/// [`ListingError::Failed`] when the request itself fails.
pub async fn submit_write<A: UserApi>(api: &A, write: &PendingWrite) -> Result<(), ListingError> {
    match write.kind {
        WriteKind::List => log!(
            "Listing on train {} ({} -> {}) in {}",
            write.status.train_number,
            write.status.boarding_station,
            write.status.destination_station,
            write.status.preferred_class
        ),
        WriteKind::Unlist => log!("Clearing travel status"),
    }

    match api.update_travel_status(&write.token, &write.status).await {
        Ok(ack) if ack.success => Ok(()),
        Ok(ack) => {
            log!("Travel status update refused: {:?}", ack.message);
            Err(ListingError::Rejected(write.kind))
        }
        Err(e) => {
            leptos::logging::error!("Error updating travel status: {e}");
            Err(ListingError::Failed {
                server_message: e.server_message().map(str::to_string),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, StatusAck};
    use crate::listing::fake::FakeUserApi;
    use crate::listing::{CardModel, Footer, Reconciliation};
    use crate::models::{Station, TrainListing, TravelStatus};
    use chrono::NaiveDate;
    use futures::executor::block_on;

    fn train() -> TrainListing {
        TrainListing {
            train_number: "12951".to_string(),
            from_station: Station { code: "MMCT".to_string(), name: String::new() },
            to_station: Station { code: "NDLS".to_string(), name: String::new() },
            train_date: Some("05-03-2024".to_string()),
            ..TrainListing::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
    }

    /// Run a whole toggle against `api` the way the card does
    fn toggle(model: &mut CardModel, api: &FakeUserApi, token: Option<&str>) -> Option<u32> {
        let Ok(write) = model.begin_toggle(&train(), token.map(str::to_string), today()) else {
            return None;
        };
        let result = block_on(submit_write(api, &write));
        model.finish_write(&write, result)
    }

    #[test]
    fn test_list_then_unlist() {
        let api = FakeUserApi::default();
        let mut model = CardModel::new();
        model.apply_reconciliation(Reconciliation::NotListed);
        model.select_class("SL");

        assert_eq!(toggle(&mut model, &api, Some("secret")), None);
        assert!(model.is_listed());

        let banner = toggle(&mut model, &api, Some("secret"));
        assert!(banner.is_some());
        assert!(!model.is_listed());
        assert_eq!(model.footer(), Footer::JustUnlisted);

        let writes = api.writes.borrow();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0].preferred_class, "SL");
        assert_eq!(writes[1], TravelStatus::cleared());
    }

    #[test]
    fn test_no_class_means_no_request() {
        let api = FakeUserApi::default();
        let mut model = CardModel::new();
        toggle(&mut model, &api, Some("secret"));
        assert_eq!(api.request_count(), 0);
        assert_eq!(model.error(), Some(&ListingError::ClassNotSelected));
    }

    #[test]
    fn test_no_token_means_no_request() {
        let api = FakeUserApi::default();
        let mut model = CardModel::new();
        model.select_class("SL");
        toggle(&mut model, &api, None);
        assert_eq!(api.request_count(), 0);
        assert_eq!(
            model.error().map(ListingError::message).as_deref(),
            Some("Please login to list yourself on this train")
        );
    }

    #[test]
    fn test_rejected_unlist() {
        let api = FakeUserApi::default().replying(Ok(StatusAck { success: false, message: None }));
        let mut model = CardModel::new();
        model.apply_reconciliation(Reconciliation::Listed { preferred_class: None });

        assert_eq!(toggle(&mut model, &api, Some("secret")), None);
        assert!(model.is_listed());
        assert_eq!(model.error(), Some(&ListingError::Rejected(WriteKind::Unlist)));
    }

    #[test]
    fn test_network_failure_uses_server_message() {
        let api = FakeUserApi::default().replying(Err(ApiError::Http {
            status: 409,
            message: Some("You are already listed on another train".to_string()),
        }));
        let mut model = CardModel::new();
        model.select_class("SL");

        toggle(&mut model, &api, Some("secret"));
        assert!(!model.is_listed());
        assert_eq!(
            model.error().map(ListingError::message).as_deref(),
            Some("You are already listed on another train")
        );
    }

    #[test]
    fn test_network_failure_without_message() {
        let api = FakeUserApi::default().replying(Err(ApiError::Network("offline".to_string())));
        let mut model = CardModel::new();
        model.select_class("SL");

        toggle(&mut model, &api, Some("secret"));
        assert!(!model.is_listed());
        assert!(!model.is_in_flight());
        assert_eq!(
            model.error().map(ListingError::message).as_deref(),
            Some("An error occurred. Please try again.")
        );
    }

    #[test]
    fn test_one_request_per_toggle() {
        let api = FakeUserApi::default().replying(Err(ApiError::Network("offline".to_string())));
        let mut model = CardModel::new();
        model.select_class("SL");
        toggle(&mut model, &api, Some("secret"));
        assert_eq!(api.writes.borrow().len(), 1);
    }
}
