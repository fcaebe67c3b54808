//! Terminal front-end. Drives a [`Dealer`](crate::dealer::Dealer) per round and only
//! feeds back holds and deal/replace commands.

pub mod app;
pub mod controller;
mod ui;
