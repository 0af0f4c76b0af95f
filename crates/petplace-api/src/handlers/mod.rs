//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod chat;
pub mod email_auth;
pub mod feeds;
pub mod health;
pub mod hotels;
pub mod notifications;
pub mod payments;
pub mod pets;
pub mod reservations;
pub mod users;
