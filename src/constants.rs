use std::time::Duration;

/// Endpoint returning the signed-in user, including their travel status
pub const USERS_ME_PATH: &str = "/api/users/me";

/// Endpoint that overwrites the signed-in user's travel status
pub const TRAVEL_STATUS_PATH: &str = "/api/users/travel-status";

/// Endpoint used by the search form to load trains between two stations
pub const TRAIN_SEARCH_PATH: &str = "/api/trains/search";

/// `localStorage` key holding the session token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// How long the "you have been unlisted" confirmation stays visible
pub const UNLIST_BANNER_DURATION: Duration = Duration::from_millis(3000);

/// Classes offered when a search result does not say which ones the train carries
pub const DEFAULT_TRAVEL_CLASSES: &[&str] = &["1A", "2A", "3A", "SL", "CC", "2S"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlist_banner_shown_for_three_seconds() {
        assert_eq!(UNLIST_BANNER_DURATION, Duration::from_millis(3000));
    }
}
