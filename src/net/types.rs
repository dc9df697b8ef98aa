//! Shared JSON types mirroring the backend API.
//!
//! The backend stores documents in Mongo, so identifiers arrive as `_id`
//! and field names are camelCase; serde renames keep the Rust side
//! idiomatic.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Role of an authenticated user. Closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Organizer,
    Admin,
}

impl Role {
    /// Roles allowed to create, edit, and delete events.
    pub fn can_manage_events(self) -> bool {
        matches!(self, Self::Organizer | Self::Admin)
    }

    /// Capitalized label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Organizer => "Organizer",
            Self::Admin => "Admin",
        }
    }
}

/// The authenticated principal. Replaced wholesale on login or session
/// check, cleared on logout.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Response of a successful login or registration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// Body for `POST /api/auth/register`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// An event as returned by the events endpoints.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// ISO date string; formatted for display by `util::datetime`.
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub location: String,
    #[serde(default)]
    pub department: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub capacity: u32,
    #[serde(default)]
    pub attendees: Vec<AttendeeRef>,
    pub organizer: Organizer,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default, rename = "motivationContent")]
    pub motivation_content: Option<MotivationContent>,
    #[serde(default)]
    pub fee: Option<u32>,
}

impl Event {
    pub fn is_full(&self) -> bool {
        self.attendees.len() >= self.capacity as usize
    }

    pub fn has_attendee(&self, user_id: &str) -> bool {
        self.attendees.iter().any(|a| a.id() == user_id)
    }
}

/// The user who created an event.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Organizer {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// An attendee entry. The list endpoint returns bare ids while the details
/// endpoint populates user records, so both shapes deserialize.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum AttendeeRef {
    Id(String),
    User(Organizer),
}

impl AttendeeRef {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::User(user) => &user.id,
        }
    }
}

/// Search and filter criteria for the events listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventFilters {
    pub search: String,
    pub department: String,
    pub kind: String,
}

/// A notification shown in the bell dropdown.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
}

/// A message on the community board.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CommunityPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: Organizer,
    pub content: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: String,
}

/// Motivation content attached to an event or generated on demand.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotivationContent {
    #[serde(default)]
    pub quotes: Vec<Quote>,
    #[serde(default)]
    pub tips: Vec<Tip>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tip {
    pub text: String,
}

/// Fields for a new event; the optional photo travels alongside as a
/// multipart file.
#[derive(Clone, Debug, Default)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub department: String,
    pub kind: String,
    pub capacity: String,
}

/// Body for `POST /api/events/register`.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistration {
    pub event_id: String,
    pub name: String,
    pub reg_no: String,
    pub needs_accommodation: bool,
}

/// Response of `POST /api/events/register`.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationReceipt {
    #[serde(default)]
    pub registration_id: Option<String>,
}

/// Response of `POST /api/events/verify-payment`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct PaymentVerification {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
