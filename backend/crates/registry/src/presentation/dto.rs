//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{animal::Animal, support_ticket::SupportTicket};
use crate::domain::value_object::{AnimalType, BreedRating, Gender};

// ============================================================================
// Animals
// ============================================================================

/// Animal registration request. Required fields are options so their
/// absence reaches the use case as a 400 rather than a parse failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnimalRequest {
    pub breed: Option<String>,
    pub animal_type: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub tag_id: Option<String>,
    pub location: Option<String>,
    pub owner_name: Option<String>,
    pub notes: Option<String>,
    pub image_uri: Option<String>,
    pub confidence: Option<i32>,
    pub feedback_id: Option<String>,
    #[serde(default)]
    pub breed_ratings: Vec<BreedRating>,
    pub registration_date: Option<DateTime<Utc>>,
}

/// Animal wire shape
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalResponse {
    pub id: String,
    pub user_id: String,
    pub breed: String,
    pub animal_type: AnimalType,
    pub age: i32,
    pub gender: Gender,
    pub tag_id: String,
    pub location: Option<String>,
    pub owner_name: Option<String>,
    pub notes: Option<String>,
    pub image_uri: Option<String>,
    pub confidence: Option<i32>,
    pub feedback_id: Option<String>,
    pub breed_ratings: Vec<BreedRating>,
    pub registration_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Animal> for AnimalResponse {
    fn from(animal: &Animal) -> Self {
        Self {
            id: animal.animal_id.as_str().to_string(),
            user_id: animal.user_id.as_str().to_string(),
            breed: animal.breed.clone(),
            animal_type: animal.animal_type,
            age: animal.age,
            gender: animal.gender,
            tag_id: animal.tag_id.clone(),
            location: animal.location.clone(),
            owner_name: animal.owner_name.clone(),
            notes: animal.notes.clone(),
            image_uri: animal.image_uri.clone(),
            confidence: animal.confidence,
            feedback_id: animal.feedback_id.clone(),
            breed_ratings: animal.breed_ratings.clone(),
            registration_date: animal.registration_date,
            created_at: animal.created_at,
            updated_at: animal.updated_at,
        }
    }
}

/// Delete acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct DeleteAnimalResponse {
    pub ok: bool,
}

// ============================================================================
// Support tickets
// ============================================================================

/// Ticket submission request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTicketRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Ticket wire shape
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subject: String,
    pub message: String,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<&SupportTicket> for TicketResponse {
    fn from(ticket: &SupportTicket) -> Self {
        Self {
            id: ticket.ticket_id.as_str().to_string(),
            user_id: ticket.user_id.as_str().to_string(),
            kind: ticket.kind.as_str().to_string(),
            subject: ticket.subject.clone(),
            message: ticket.message.clone(),
            user_email: ticket.user_email.clone(),
            user_name: ticket.user_name.clone(),
            timestamp: ticket.submitted_at,
            status: ticket.status.as_str().to_string(),
            created_at: ticket.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::animal::AnimalDraft;
    use kernel::id::UserId;

    #[test]
    fn test_animal_response_camel_case_keys() {
        let animal = Animal::new(
            UserId::from_counter(1),
            AnimalDraft {
                breed: "Gir".to_string(),
                animal_type: AnimalType::Cattle,
                age: 3,
                gender: Gender::Female,
                tag_id: "TAG001".to_string(),
                location: None,
                owner_name: None,
                notes: None,
                image_uri: None,
                confidence: Some(92),
                feedback_id: None,
                breed_ratings: vec![],
                registration_date: None,
            },
        );

        let json = serde_json::to_string(&AnimalResponse::from(&animal)).unwrap();

        assert!(json.contains("\"animalType\":\"Cattle\""));
        assert!(json.contains("\"tagId\":\"TAG001\""));
        assert!(json.contains("\"registrationDate\""));
        assert!(json.contains("\"breedRatings\":[]"));
    }

    #[test]
    fn test_ticket_request_uses_type_key() {
        let json = r#"{"type":"bug","subject":"s","message":"m"}"#;
        let req: SubmitTicketRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.kind.as_deref(), Some("bug"));
    }
}
