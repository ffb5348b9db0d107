//! The top-level client.

use std::sync::Arc;

use crate::config::ClientOptions;
use crate::error::CalResult;
use crate::http::HttpClient;
use crate::resources::{
    Bookings, Calendars, Conferencing, EventTypes, Me, Organizations, Platform, Schedules,
    Slots, Teams, Webhooks,
};
use crate::transport::Transport;

/// A Cal.com v2 API client.
///
/// One instance per credential set; cheap to share by reference across
/// tasks. Resource accessors borrow the client, so the usual pattern is
/// `client.bookings().list(..)`.
#[derive(Debug)]
pub struct CalClient {
    http: HttpClient,
}

impl CalClient {
    /// Creates a client from explicit options.
    pub fn new(options: ClientOptions) -> Self {
        Self {
            http: HttpClient::new(options),
        }
    }

    /// Creates a client from `CALDOTCOM_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`CalError::Config`](crate::CalError::Config) when no
    /// credentials are present in the environment.
    pub fn from_env() -> CalResult<Self> {
        Ok(Self::new(ClientOptions::from_env()?))
    }

    /// Creates a client backed by a caller-supplied transport.
    pub fn with_transport(options: ClientOptions, transport: Arc<dyn Transport>) -> Self {
        Self {
            http: HttpClient::with_transport(options, transport),
        }
    }

    /// Direct access to the request engine, for endpoints without a typed
    /// wrapper yet.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Booking endpoints.
    pub fn bookings(&self) -> Bookings<'_> {
        Bookings::new(&self.http)
    }

    /// Event type endpoints.
    pub fn event_types(&self) -> EventTypes<'_> {
        EventTypes::new(&self.http)
    }

    /// Availability schedule endpoints.
    pub fn schedules(&self) -> Schedules<'_> {
        Schedules::new(&self.http)
    }

    /// Slot availability and reservation endpoints.
    pub fn slots(&self) -> Slots<'_> {
        Slots::new(&self.http)
    }

    /// Team endpoints.
    pub fn teams(&self) -> Teams<'_> {
        Teams::new(&self.http)
    }

    /// Webhook endpoints.
    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(&self.http)
    }

    /// Connected calendar endpoints.
    pub fn calendars(&self) -> Calendars<'_> {
        Calendars::new(&self.http)
    }

    /// Profile endpoints for the authenticated user.
    pub fn me(&self) -> Me<'_> {
        Me::new(&self.http)
    }

    /// Conferencing app endpoints.
    pub fn conferencing(&self) -> Conferencing<'_> {
        Conferencing::new(&self.http)
    }

    /// Organization-scoped endpoints.
    pub fn organizations(&self) -> Organizations<'_> {
        Organizations::new(&self.http)
    }

    /// Platform endpoints; require OAuth client credentials.
    pub fn platform(&self) -> Platform<'_> {
        Platform::new(&self.http)
    }
}
