//! Typed wrappers over the API's resource endpoints.
//!
//! Each resource borrows the client's engine; all state lives in
//! [`HttpClient`](crate::http::HttpClient). Single-resource operations
//! unwrap the `{ status, data }` envelope and return the payload; list
//! operations return the envelope so pagination metadata survives.

mod bookings;
mod calendars;
mod conferencing;
mod event_types;
mod me;
mod organizations;
mod platform;
mod schedules;
mod slots;
mod teams;
mod webhooks;

pub use bookings::Bookings;
pub use calendars::Calendars;
pub use conferencing::Conferencing;
pub use event_types::EventTypes;
pub use me::Me;
pub use organizations::{OrgAttributes, OrgTeams, Organizations};
pub use platform::{ManagedUsers, Platform, PlatformWebhooks};
pub use schedules::Schedules;
pub use slots::Slots;
pub use teams::Teams;
pub use webhooks::Webhooks;
