#![allow(unknown_lints)]

pub mod logging;
pub mod api;
pub mod components;
pub mod constants;
pub mod listing;
pub mod models;
pub mod session;
pub mod time;

pub use components::app::App;
