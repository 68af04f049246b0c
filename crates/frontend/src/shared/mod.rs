pub mod alert;
pub mod api_utils;
pub mod collection;
pub mod components;
pub mod config;
pub mod details;
pub mod error;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod remote;
