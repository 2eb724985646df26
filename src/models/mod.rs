mod train_listing;
mod travel_status;

pub use train_listing::{Station, TrainListing};
pub use travel_status::TravelStatus;
