#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod class_info;
pub mod search_form;
pub mod train_card;
pub mod train_list;
