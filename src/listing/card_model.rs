use chrono::NaiveDate;
use std::fmt;
use super::Reconciliation;
use crate::log;
use crate::models::{TrainListing, TravelStatus};
use crate::time::parse_train_date;

/// Whether the viewer is listed on the card's train
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingPhase {
    /// The travel status has not been checked yet
    Unknown,
    NotListed,
    Listed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    List,
    Unlist,
}

/// A travel-status write that has been accepted locally and must be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWrite {
    pub kind: WriteKind,
    /// Train the write was started for; see [`CardModel::reset_for_new_train`]
    pub train_epoch: u32,
    pub token: String,
    pub status: TravelStatus,
}

/// Everything that can stop a list/unlist action, shown inline on the card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    ClassNotSelected,
    NotLoggedIn,
    UnreadableTrainDate,
    /// Another write from this card has not finished yet
    WriteInProgress,
    /// The backend answered `success: false`
    Rejected(WriteKind),
    /// The request failed; carries the backend's message when it sent one
    Failed { server_message: Option<String> },
}

impl ListingError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::ClassNotSelected => "Please select a travel class before listing yourself".to_string(),
            Self::NotLoggedIn => "Please login to list yourself on this train".to_string(),
            Self::UnreadableTrainDate => "Could not read this train's date".to_string(),
            Self::WriteInProgress => "Please wait for the previous update to finish".to_string(),
            Self::Rejected(WriteKind::List) => "Failed to list yourself on this train".to_string(),
            Self::Rejected(WriteKind::Unlist) => "Failed to unlist from this train".to_string(),
            Self::Failed { server_message: Some(message) } => message.clone(),
            Self::Failed { server_message: None } => "An error occurred. Please try again.".to_string(),
        }
    }
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ListingError {}

/// What the bottom of the card shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Footer {
    Listed { class: String },
    JustUnlisted,
    ReadyToList { class: String },
    Empty,
}

/// Local state of one train card.
///
/// Only completed reconciliations and writes move the listing phase; the
/// component holds this in a single signal and renders from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    phase: ListingPhase,
    selected_class: Option<String>,
    in_flight: bool,
    error: Option<ListingError>,
    /// Generation of the visible "unlisted" banner
    unlist_banner: Option<u32>,
    banner_generation: u32,
    /// Bumped every time the card starts showing a different train
    train_epoch: u32,
}

impl Default for CardModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CardModel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: ListingPhase::Unknown,
            selected_class: None,
            in_flight: false,
            error: None,
            unlist_banner: None,
            banner_generation: 0,
            train_epoch: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> ListingPhase {
        self.phase
    }

    #[must_use]
    pub fn is_listed(&self) -> bool {
        self.phase == ListingPhase::Listed
    }

    #[must_use]
    pub fn selected_class(&self) -> Option<&str> {
        self.selected_class.as_deref()
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn error(&self) -> Option<&ListingError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn shows_unlist_banner(&self) -> bool {
        self.unlist_banner.is_some()
    }

    pub fn select_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        self.selected_class = if class.is_empty() { None } else { Some(class) };
    }

    /// Forget everything about the previous train.
    ///
    /// A write that is still in flight keeps the card busy until it finishes,
    /// but its result no longer changes the listing phase.
    pub fn reset_for_new_train(&mut self) {
        self.train_epoch = self.train_epoch.wrapping_add(1);
        self.phase = ListingPhase::Unknown;
        self.selected_class = None;
        self.error = None;
        self.unlist_banner = None;
    }

    /// Apply the result of checking the stored travel status.
    ///
    /// Ignored once the phase is known: a write that finished first is newer.
    pub fn apply_reconciliation(&mut self, reconciliation: Reconciliation) {
        if self.phase != ListingPhase::Unknown {
            return;
        }
        match reconciliation {
            Reconciliation::Listed { preferred_class } => {
                self.phase = ListingPhase::Listed;
                if let Some(class) = preferred_class {
                    self.selected_class = Some(class);
                }
            }
            Reconciliation::NotListed => self.phase = ListingPhase::NotListed,
        }
    }

    /// Start a list or unlist action.
    ///
    /// A listed card always unlists. Otherwise a class must be selected first,
    /// then a session token must be present. On success the card is marked
    /// in flight until [`CardModel::finish_write`] is called.
    ///
    /// # Errors
    ///
    /// Returns the reason no request should be sent; every reason except
    /// [`ListingError::WriteInProgress`] is also recorded for display.
    pub fn begin_toggle(
        &mut self,
        train: &TrainListing,
        token: Option<String>,
        today: NaiveDate,
    ) -> Result<PendingWrite, ListingError> {
        if self.in_flight {
            return Err(ListingError::WriteInProgress);
        }

        let kind = if self.is_listed() { WriteKind::Unlist } else { WriteKind::List };

        if kind == WriteKind::List && self.selected_class.is_none() {
            return Err(self.record(ListingError::ClassNotSelected));
        }

        self.error = None;
        self.unlist_banner = None;

        let Some(token) = token else {
            return Err(self.record(ListingError::NotLoggedIn));
        };

        let status = match kind {
            WriteKind::Unlist => TravelStatus::cleared(),
            WriteKind::List => {
                let Ok(travel_date) = parse_train_date(train.train_date.as_deref(), today) else {
                    return Err(self.record(ListingError::UnreadableTrainDate));
                };
                let class = self.selected_class.as_deref().unwrap_or_default();
                TravelStatus::listing(train, travel_date, class)
            }
        };

        self.in_flight = true;
        Ok(PendingWrite {
            kind,
            train_epoch: self.train_epoch,
            token,
            status,
        })
    }

    /// Apply the outcome of a write started by [`CardModel::begin_toggle`].
    ///
    /// Returns the banner generation to clear later when an unlist succeeded.
    pub fn finish_write(&mut self, write: &PendingWrite, result: Result<(), ListingError>) -> Option<u32> {
        self.in_flight = false;

        if write.train_epoch != self.train_epoch {
            log!("Dropping travel status result for a train no longer shown");
            return None;
        }

        if let Err(e) = result {
            self.error = Some(e);
            return None;
        }

        match write.kind {
            WriteKind::List => {
                self.phase = ListingPhase::Listed;
                None
            }
            WriteKind::Unlist => {
                self.phase = ListingPhase::NotListed;
                self.banner_generation = self.banner_generation.wrapping_add(1);
                self.unlist_banner = Some(self.banner_generation);
                self.unlist_banner
            }
        }
    }

    /// Hide the "unlisted" banner if it is still the one shown for `generation`
    pub fn clear_unlist_banner(&mut self, generation: u32) {
        if self.unlist_banner == Some(generation) {
            self.unlist_banner = None;
        }
    }

    #[must_use]
    pub fn footer(&self) -> Footer {
        if self.is_listed() {
            Footer::Listed {
                class: self.selected_class.clone().unwrap_or_default(),
            }
        } else if self.shows_unlist_banner() {
            Footer::JustUnlisted
        } else if let Some(class) = &self.selected_class {
            Footer::ReadyToList { class: class.clone() }
        } else {
            Footer::Empty
        }
    }

    fn record(&mut self, error: ListingError) -> ListingError {
        self.error = Some(error.clone());
        error
    }
}
