//! Records exchanged between the store and the HTTP handlers.

pub(crate) mod user;

pub(crate) use user::*;
