//! Slot availability and reservation operations.

use crate::error::CalResult;
use crate::http::{HttpClient, Query};
use crate::types::{
    ApiResponse, AvailableSlots, GetAvailableSlotsOptions, ReserveSlotInput, ReserveSlotOutput,
};

/// Slot endpoints (`/slots`).
#[derive(Debug)]
pub struct Slots<'a> {
    http: &'a HttpClient,
}

impl<'a> Slots<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Queries available slots for an event type within a window.
    pub async fn get_available(
        &self,
        options: &GetAvailableSlotsOptions,
    ) -> CalResult<AvailableSlots> {
        let response: ApiResponse<AvailableSlots> =
            self.http.get_query("/slots", options_query(options)).await?;
        Ok(response.data)
    }

    /// Places a temporary hold on a slot.
    pub async fn reserve(&self, input: &ReserveSlotInput) -> CalResult<ReserveSlotOutput> {
        let response: ApiResponse<ReserveSlotOutput> =
            self.http.post("/slots/reservations", input).await?;
        Ok(response.data)
    }

    /// Releases a held slot before it expires.
    pub async fn remove_reservation(&self, reservation_uid: &str) -> CalResult<()> {
        let _: serde_json::Value = self
            .http
            .delete(&format!(
                "/slots/reservations/{}",
                urlencoding::encode(reservation_uid)
            ))
            .await?;
        Ok(())
    }
}

fn options_query(options: &GetAvailableSlotsOptions) -> Query {
    let mut query = Query::new();
    query.push("start", options.start.to_rfc3339());
    query.push("end", options.end.to_rfc3339());
    query.push_opt("eventTypeId", options.event_type_id);
    query.push_opt("eventTypeSlug", options.event_type_slug.as_deref());
    query.push_opt("username", options.username.as_deref());
    query.push_opt("organizationSlug", options.organization_slug.as_deref());
    query.push_opt("teamSlug", options.team_slug.as_deref());
    if !options.usernames.is_empty() {
        query.push("usernames", options.usernames.join(","));
    }
    query.push_opt("timeZone", options.time_zone.as_deref());
    query.push_opt("duration", options.duration);
    if options.range_format {
        query.push("format", "range");
    }
    query.push_opt(
        "bookingUidToReschedule",
        options.booking_uid_to_reschedule.as_deref(),
    );
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usernames_join_with_commas() {
        let mut options = GetAvailableSlotsOptions::new(
            "2024-08-13T00:00:00Z".parse().unwrap(),
            "2024-08-14T00:00:00Z".parse().unwrap(),
        );
        options.usernames = vec!["alice".into(), "bob".into()];
        options.range_format = true;
        let query = options_query(&options);
        let pairs = query.pairs();
        assert!(pairs.contains(&("usernames".to_string(), "alice,bob".to_string())));
        assert!(pairs.contains(&("format".to_string(), "range".to_string())));
        // The window always leads.
        assert_eq!(pairs[0].0, "start");
        assert_eq!(pairs[1].0, "end");
    }

    #[test]
    fn default_format_is_omitted() {
        let options = GetAvailableSlotsOptions::new(
            "2024-08-13T00:00:00Z".parse().unwrap(),
            "2024-08-14T00:00:00Z".parse().unwrap(),
        )
        .with_event_type_id(11);
        let query = options_query(&options);
        assert!(!query.pairs().iter().any(|(k, _)| k == "format"));
        assert!(query
            .pairs()
            .contains(&("eventTypeId".to_string(), "11".to_string())));
    }
}
