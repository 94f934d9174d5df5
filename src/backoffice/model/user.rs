use super::{merge, Record, RecordId, RecordKind, RecordPatch};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hair {
    pub color: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address: String,
    pub city: String,
    pub coordinates: Coordinates,
    pub postal_code: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub card_expire: String,
    pub card_number: String,
    pub card_type: String,
    pub currency: String,
    pub iban: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub address: Address,
    pub department: String,
    pub name: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub maiden_name: String,
    pub age: u32,
    pub gender: Gender,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub password: String,
    pub birth_date: NaiveDate,
    pub image: String,
    pub blood_group: String,
    pub height: f64,
    pub weight: f64,
    pub eye_color: String,
    pub hair: Hair,
    pub domain: String,
    pub ip: String,
    pub address: Address,
    pub mac_address: String,
    pub university: String,
    pub bank: Bank,
    pub company: Company,
    pub ein: String,
    pub ssn: String,
    pub user_agent: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub maiden_name: String,
    pub age: u32,
    pub gender: Gender,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub password: String,
    pub birth_date: NaiveDate,
    pub image: String,
    pub blood_group: String,
    pub height: f64,
    pub weight: f64,
    pub eye_color: String,
    pub hair: Hair,
    pub domain: String,
    pub ip: String,
    pub address: Address,
    pub mac_address: String,
    pub university: String,
    pub bank: Bank,
    pub company: Company,
    pub ein: String,
    pub ssn: String,
    pub user_agent: String,
}

/// Partial user update. Nested objects (`address`, `bank`, `company`, `hair`)
/// replace the stored value as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default)]
    pub id: RecordId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maiden_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair: Option<Hair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<Bank>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ein: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl UserPatch {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}

impl RecordPatch for UserPatch {
    fn target(&self) -> RecordId {
        self.id
    }

    fn retarget(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for User {
    type New = NewUser;
    type Patch = UserPatch;

    const KIND: RecordKind = RecordKind::User;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn build(id: RecordId, p: NewUser, now: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: p.first_name,
            last_name: p.last_name,
            maiden_name: p.maiden_name,
            age: p.age,
            gender: p.gender,
            email: p.email,
            phone: p.phone,
            username: p.username,
            password: p.password,
            birth_date: p.birth_date,
            image: p.image,
            blood_group: p.blood_group,
            height: p.height,
            weight: p.weight,
            eye_color: p.eye_color,
            hair: p.hair,
            domain: p.domain,
            ip: p.ip,
            address: p.address,
            mac_address: p.mac_address,
            university: p.university,
            bank: p.bank,
            company: p.company,
            ein: p.ein,
            ssn: p.ssn,
            user_agent: p.user_agent,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, p: UserPatch, now: DateTime<Utc>) {
        merge(&mut self.first_name, p.first_name);
        merge(&mut self.last_name, p.last_name);
        merge(&mut self.maiden_name, p.maiden_name);
        merge(&mut self.age, p.age);
        merge(&mut self.gender, p.gender);
        merge(&mut self.email, p.email);
        merge(&mut self.phone, p.phone);
        merge(&mut self.username, p.username);
        merge(&mut self.password, p.password);
        merge(&mut self.birth_date, p.birth_date);
        merge(&mut self.image, p.image);
        merge(&mut self.blood_group, p.blood_group);
        merge(&mut self.height, p.height);
        merge(&mut self.weight, p.weight);
        merge(&mut self.eye_color, p.eye_color);
        merge(&mut self.hair, p.hair);
        merge(&mut self.domain, p.domain);
        merge(&mut self.ip, p.ip);
        merge(&mut self.address, p.address);
        merge(&mut self.mac_address, p.mac_address);
        merge(&mut self.university, p.university);
        merge(&mut self.bank, p.bank);
        merge(&mut self.company, p.company);
        merge(&mut self.ein, p.ein);
        merge(&mut self.ssn, p.ssn);
        merge(&mut self.user_agent, p.user_agent);
        self.updated_at = now;
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.first_name.as_str()),
            Cow::Borrowed(self.last_name.as_str()),
            Cow::Owned(self.full_name()),
            Cow::Borrowed(self.email.as_str()),
            Cow::Borrowed(self.username.as_str()),
        ]
    }

    fn label(&self) -> String {
        self.full_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn full_name_is_searchable() {
        let user = seed::users().remove(0);
        let fields = user.search_fields();
        assert!(fields.iter().any(|f| f == "Ahmet Yılmaz"));
        assert_eq!(fields.len(), 5);
    }

    #[test]
    fn apply_replaces_nested_objects_wholesale() {
        let mut user = seed::users().remove(0);
        let original_company = user.company.clone();
        let mut bank = user.bank.clone();
        bank.currency = "EUR".into();
        bank.iban = "DE00".into();

        let patch = UserPatch {
            bank: Some(bank.clone()),
            ..UserPatch::new(user.id)
        };
        let now = Utc::now();
        user.apply(patch, now);

        assert_eq!(user.bank, bank);
        assert_eq!(user.company, original_company);
        assert_eq!(user.updated_at, now);
    }

    #[test]
    fn hair_type_serializes_as_type() {
        let hair = Hair {
            color: "Siyah".into(),
            kind: "Düz".into(),
        };
        let json = serde_json::to_value(&hair).unwrap();
        assert_eq!(json["type"], "Düz");
    }

    #[test]
    fn user_json_round_trips_camel_case() {
        let user = seed::users().remove(1);
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"firstName\":\"Ayşe\""));
        assert!(json.contains("\"birthDate\":\"2003-08-02\""));
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
