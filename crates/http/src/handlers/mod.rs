#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod calendar;
pub mod chat;
pub mod contacts;
pub mod credentials;
pub mod documents;
pub mod notes;
pub mod webhooks;
