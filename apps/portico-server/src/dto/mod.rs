//! Request and response bodies for the HTTP API

pub mod health;
pub mod items;
