//! Booking operations.

use crate::error::CalResult;
use crate::http::{HttpClient, Query};
use crate::types::{
    ApiResponse, Booking, BookingOutcome, CancelBookingInput, CreateBookingInput,
    GetBookingsFilters, ListResponse, MarkAbsentInput, RescheduleBookingInput,
    UpdateBookingInput,
};

/// Booking endpoints (`/bookings`).
#[derive(Debug)]
pub struct Bookings<'a> {
    http: &'a HttpClient,
}

impl<'a> Bookings<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Creates a booking. A recurring event type yields every instance.
    pub async fn create(&self, input: &CreateBookingInput) -> CalResult<BookingOutcome> {
        let response: ApiResponse<BookingOutcome> = self.http.post("/bookings", input).await?;
        Ok(response.data)
    }

    /// Lists bookings visible to the authenticated user.
    pub async fn list(&self, filters: &GetBookingsFilters) -> CalResult<ListResponse<Booking>> {
        self.http.get_query("/bookings", filters_query(filters)).await
    }

    /// Fetches a booking by its uid.
    pub async fn get(&self, uid: &str) -> CalResult<Booking> {
        let response: ApiResponse<Booking> = self.http.get(&booking_path(uid, "")).await?;
        Ok(response.data)
    }

    /// Updates a booking in place.
    pub async fn update(&self, uid: &str, input: &UpdateBookingInput) -> CalResult<Booking> {
        let response: ApiResponse<Booking> =
            self.http.patch(&booking_path(uid, ""), input).await?;
        Ok(response.data)
    }

    /// Cancels a booking.
    pub async fn cancel(&self, uid: &str, input: &CancelBookingInput) -> CalResult<Booking> {
        let response: ApiResponse<Booking> =
            self.http.post(&booking_path(uid, "/cancel"), input).await?;
        Ok(response.data)
    }

    /// Reschedules a booking to a new start time. The returned booking is
    /// the new one; the original is cancelled.
    pub async fn reschedule(
        &self,
        uid: &str,
        input: &RescheduleBookingInput,
    ) -> CalResult<Booking> {
        let response: ApiResponse<Booking> = self
            .http
            .post(&booking_path(uid, "/reschedule"), input)
            .await?;
        Ok(response.data)
    }

    /// Records host or attendee absence on a past booking.
    pub async fn mark_absent(&self, uid: &str, input: &MarkAbsentInput) -> CalResult<Booking> {
        let response: ApiResponse<Booking> = self
            .http
            .post(&booking_path(uid, "/mark-absent"), input)
            .await?;
        Ok(response.data)
    }
}

fn booking_path(uid: &str, suffix: &str) -> String {
    format!("/bookings/{}{}", urlencoding::encode(uid), suffix)
}

fn filters_query(filters: &GetBookingsFilters) -> Query {
    let mut query = Query::new();
    if !filters.status.is_empty() {
        let statuses: Vec<&str> = filters.status.iter().map(|s| s.as_str()).collect();
        query.push("status", statuses.join(","));
    }
    query.push_opt("attendeeEmail", filters.attendee_email.as_deref());
    query.push_opt("eventTypeId", filters.event_type_id);
    if !filters.event_type_ids.is_empty() {
        let ids: Vec<String> = filters.event_type_ids.iter().map(u64::to_string).collect();
        query.push("eventTypeIds", ids.join(","));
    }
    query.push_opt("teamId", filters.team_id);
    query.push_opt("afterStart", filters.after.as_deref());
    query.push_opt("beforeEnd", filters.before.as_deref());
    if let Some(sort) = filters.sort {
        query.push(format!("sort{}", capitalized(sort.field.as_str())), sort.direction.as_str());
    }
    query.push_opt("take", filters.take);
    query
}

fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
