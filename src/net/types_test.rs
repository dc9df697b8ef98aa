use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_deserializes_lowercase() {
    let role: Role = serde_json::from_str("\"organizer\"").expect("role");
    assert_eq!(role, Role::Organizer);
}

#[test]
fn role_rejects_unknown_values() {
    assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
}

#[test]
fn role_manage_events_matrix() {
    assert!(!Role::Student.can_manage_events());
    assert!(Role::Organizer.can_manage_events());
    assert!(Role::Admin.can_manage_events());
}

// =============================================================
// User / AuthSession
// =============================================================

#[test]
fn user_maps_mongo_id() {
    let user: User = serde_json::from_value(serde_json::json!({
        "_id": "u-1",
        "name": "Priya",
        "email": "priya@college.edu",
        "role": "student"
    }))
    .expect("user");
    assert_eq!(user.id, "u-1");
    assert_eq!(user.role, Role::Student);
}

#[test]
fn auth_session_carries_token_and_user() {
    let session: AuthSession = serde_json::from_value(serde_json::json!({
        "token": "T",
        "user": {"_id": "u-1", "name": "Priya", "email": "p@c.edu", "role": "admin"}
    }))
    .expect("auth session");
    assert_eq!(session.token, "T");
    assert_eq!(session.user.role, Role::Admin);
}

// =============================================================
// Event
// =============================================================

fn event_json() -> serde_json::Value {
    serde_json::json!({
        "_id": "e-1",
        "title": "Tech Workshop",
        "description": "Hands-on session",
        "date": "2026-03-15T00:00:00.000Z",
        "time": "10:00",
        "location": "Main Hall",
        "department": "Computer Technology",
        "type": "academic",
        "capacity": 2,
        "attendees": ["u-1"],
        "organizer": {"_id": "u-9", "name": "Dr. Rao"}
    })
}

#[test]
fn event_maps_type_field_and_defaults() {
    let event: Event = serde_json::from_value(event_json()).expect("event");
    assert_eq!(event.kind, "academic");
    assert!(event.photo.is_none());
    assert!(event.motivation_content.is_none());
}

#[test]
fn attendees_accept_bare_ids_and_records() {
    let mut json = event_json();
    json["attendees"] = serde_json::json!(["u-1", {"_id": "u-2", "name": "Asha"}]);
    let event: Event = serde_json::from_value(json).expect("event");
    assert!(event.has_attendee("u-1"));
    assert!(event.has_attendee("u-2"));
    assert!(!event.has_attendee("u-3"));
}

#[test]
fn event_full_when_attendees_reach_capacity() {
    let mut json = event_json();
    json["attendees"] = serde_json::json!(["u-1", "u-2"]);
    let event: Event = serde_json::from_value(json).expect("event");
    assert!(event.is_full());
}

#[test]
fn motivation_content_defaults_to_empty_lists() {
    let content: MotivationContent = serde_json::from_value(serde_json::json!({})).expect("content");
    assert!(content.quotes.is_empty());
    assert!(content.tips.is_empty());
}

// =============================================================
// Registration payloads
// =============================================================

#[test]
fn event_registration_serializes_camel_case() {
    let body = EventRegistration {
        event_id: "e-1".to_owned(),
        name: "Priya".to_owned(),
        reg_no: "21CS042".to_owned(),
        needs_accommodation: true,
    };
    let json = serde_json::to_value(&body).expect("json");
    assert_eq!(json["eventId"], "e-1");
    assert_eq!(json["regNo"], "21CS042");
    assert_eq!(json["needsAccommodation"], true);
}

#[test]
fn registration_receipt_tolerates_missing_id() {
    let receipt: RegistrationReceipt = serde_json::from_value(serde_json::json!({})).expect("receipt");
    assert!(receipt.registration_id.is_none());
}
