//! Wire types for the Cal.com v2 API.
//!
//! All shapes mirror the JSON the API speaks (camelCase keys, tagged
//! unions). Input structs skip absent optional fields entirely so a PATCH
//! only carries what the caller set.

pub mod bookings;
pub mod calendars;
pub mod common;
pub mod conferencing;
pub mod event_types;
pub mod me;
pub mod organizations;
pub mod platform;
pub mod schedules;
pub mod slots;
pub mod teams;
pub mod webhooks;

pub use bookings::*;
pub use calendars::*;
pub use common::*;
pub use conferencing::*;
pub use event_types::*;
pub use me::*;
pub use organizations::*;
pub use platform::*;
pub use schedules::*;
pub use slots::*;
pub use teams::*;
pub use webhooks::*;
