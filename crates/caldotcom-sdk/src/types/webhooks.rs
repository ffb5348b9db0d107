//! Webhook types.

use serde::{Deserialize, Serialize};

/// Events a webhook can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebhookTrigger {
    BookingCreated,
    BookingPaymentInitiated,
    BookingPaid,
    BookingRescheduled,
    BookingRequested,
    BookingCancelled,
    BookingRejected,
    BookingNoShowUpdated,
    FormSubmitted,
    MeetingEnded,
    MeetingStarted,
    RecordingReady,
    InstantMeeting,
    RecordingTranscriptionGenerated,
    OooCreated,
    AfterHostsCalVideoNoShow,
    AfterGuestsCalVideoNoShow,
    FormSubmittedNoEvent,
    DelegationCredentialError,
}

/// A user-level webhook subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    pub id: u64,
    pub user_id: u64,
    pub payload_template: Option<String>,
    pub triggers: Vec<WebhookTrigger>,
    pub subscriber_url: String,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Input for creating a webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhookInput {
    pub subscriber_url: String,
    pub triggers: Vec<WebhookTrigger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Input for updating a webhook; every field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebhookInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggers: Option<Vec<WebhookTrigger>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}
