//! Date-interval accounting engine plus the command logic built on it.

pub mod add;
pub mod aggregate;
pub mod auth;
pub mod backup;
pub mod calendar;
pub mod config;
pub mod del;
pub mod interval;
pub mod log;
pub mod rotation;
pub mod scheduler;
pub mod status;
