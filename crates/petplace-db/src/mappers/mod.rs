//! Model -> entity mappers
//!
//! Plain column mappings implement `From`; rows holding TEXT-encoded enums
//! implement `TryFrom` so a corrupted value surfaces as a domain error
//! instead of a panic.

mod chat;
mod comment;
mod device_token;
mod email_verification;
mod feed;
mod hotel;
mod like;
mod notification;
mod payment;
mod pet;
mod refresh_token;
mod reservation;
mod user;
