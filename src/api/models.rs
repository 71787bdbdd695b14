use serde::{Deserialize, Deserializer, Serialize};

pub type MusicianId = u64;

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A musician act as returned by the booking API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Musician {
    pub id: MusicianId,
    // Prospect entries nested under the user come back with `name`
    #[serde(alias = "name", default, deserialize_with = "null_as_default")]
    pub act_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub homebase: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_venue_capacity: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub agent: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub agency: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,
}

/// The signed-in user, including their prospect list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct User {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub firstname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lastname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Prospect musicians
    #[serde(default, deserialize_with = "null_as_default")]
    pub musicians: Vec<Musician>,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname).trim().to_string()
    }

    pub fn has_prospect(&self, musician_id: MusicianId) -> bool {
        self.musicians.iter().any(|m| m.id == musician_id)
    }
}

/// Body returned by the prospect mutation endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MutationAck {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_musician_from_api_json() {
        let json = r#"{
            "id": 7,
            "actName": "The Blue Notes",
            "genre": "Jazz",
            "homebase": "Chicago, IL",
            "averageVenueCapacity": 850,
            "agent": "Sam Lee",
            "agency": "Northside Talent",
            "active": true
        }"#;

        let musician: Musician = serde_json::from_str(json).unwrap();
        assert_eq!(musician.id, 7);
        assert_eq!(musician.act_name, "The Blue Notes");
        assert_eq!(musician.average_venue_capacity, 850);
        assert!(musician.active);
    }

    #[test]
    fn test_null_fields_do_not_drop_the_list() {
        let json = r#"[
            { "id": 1, "actName": "Blue Notes", "genre": "Jazz", "agent": null },
            { "id": 2, "actName": null, "genre": null, "agency": null,
              "averageVenueCapacity": null, "active": null, "homebase": "Austin" }
        ]"#;

        let musicians: Vec<Musician> = serde_json::from_str(json).unwrap();
        assert_eq!(musicians.len(), 2);
        assert_eq!(musicians[0].agent, "");
        assert_eq!(musicians[0].genre, "Jazz");
        assert_eq!(musicians[1].act_name, "");
        assert_eq!(musicians[1].average_venue_capacity, 0);
        assert!(!musicians[1].active);
        assert_eq!(musicians[1].homebase, "Austin");
    }

    #[test]
    fn test_user_with_nested_prospects_using_name_field() {
        let json = r#"{
            "id": 1,
            "firstname": "Ada",
            "lastname": "Byron",
            "email": "ada@example.com",
            "musicians": [{ "id": 3, "name": "Quartet", "genre": "Classical" }]
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name(), "Ada Byron");
        assert_eq!(user.musicians.len(), 1);
        assert_eq!(user.musicians[0].act_name, "Quartet");
        assert!(user.has_prospect(3));
        assert!(!user.has_prospect(4));
    }

    #[test]
    fn test_user_without_prospects() {
        let user: User = serde_json::from_str(r#"{ "id": 2, "email": "x@y.z" }"#).unwrap();
        assert!(user.musicians.is_empty());
    }
}
