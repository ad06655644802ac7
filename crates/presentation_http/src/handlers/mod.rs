//! HTTP request handlers

pub mod advisory;
pub mod health;
pub mod ui;
