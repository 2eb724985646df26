//! Listing a user on a train: checking the stored travel status against a
//! card's train and writing a new one when the user toggles it.

mod card_model;
mod mutator;
mod reconciler;

pub use card_model::{CardModel, Footer, ListingError, ListingPhase, PendingWrite, WriteKind};
pub use mutator::submit_write;
pub use reconciler::{check_listing, matches_train, reconcile, Reconciliation};
