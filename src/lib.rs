//! In-memory order tracking for a school canteen.
//!
//! [`lifecycle`] holds the order status state machine; everything else serves it over
//! HTTP.

pub mod audit;
pub mod catalog;
pub mod config;
pub mod dto;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod notifier;
pub mod report;
pub mod response;
pub mod routes;
pub mod search;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;
