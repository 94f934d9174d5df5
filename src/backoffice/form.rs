//! # Form Mapping
//!
//! Edit forms work on flat field sets (`address_city`, `bank_iban`,
//! `company_address_lat`), while stored users nest those values in
//! sub-objects. This module converts between the two shapes:
//!
//! - `UserForm::from(&User)` flattens a stored user to prefill an edit form
//! - [`UserForm::into_new_user`] / [`UserForm::into_patch`] nest a submitted
//!   form back into a create or update payload
//!
//! Products are already flat, so [`ProductForm`] only differs from the stored
//! shape in dropping id and timestamps.
//!
//! `sample()` on either form returns the autofill data behind the "fill with
//! sample data" action of the create pages.

use crate::model::{
    Address, Bank, Company, Coordinates, Gender, Hair, NewProduct, NewUser, Product, ProductPatch,
    RecordId, User, UserPatch,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: u32,
    pub brand: String,
    pub category: String,
    pub thumbnail: String,
    pub images: Vec<String>,
}

impl ProductForm {
    pub fn sample() -> Self {
        Self {
            title: "Samsung Galaxy S24 Ultra".into(),
            description: "En yeni Samsung Galaxy serisi, S Pen desteği ile gelişmiş kamera sistemi ve uzun pil ömrü sunar. 200MP ana kamera, 5x optik zoom ve 8K video kayıt özelliği ile profesyonel fotoğrafçılık deneyimi.".into(),
            price: 12999.0,
            discount_percentage: 15.0,
            rating: 4.8,
            stock: 45,
            brand: "Samsung".into(),
            category: "smartphones".into(),
            thumbnail: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=400&h=400&fit=crop".into(),
            images: vec![
                "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=800&h=600&fit=crop".into(),
                "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=800&h=600&fit=crop".into(),
                "https://images.unsplash.com/photo-1567581935884-3349723552ca?w=800&h=600&fit=crop".into(),
                "https://images.unsplash.com/photo-1574944985070-8b3b3a2a1f83?w=800&h=600&fit=crop".into(),
            ],
        }
    }

    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            title: self.title,
            description: self.description,
            price: self.price,
            discount_percentage: self.discount_percentage,
            rating: self.rating,
            stock: self.stock,
            brand: self.brand,
            category: self.category,
            thumbnail: self.thumbnail,
            images: self.images,
        }
    }

    /// A patch that overwrites every form field of product `id`.
    pub fn into_patch(self, id: RecordId) -> ProductPatch {
        ProductPatch {
            id,
            title: Some(self.title),
            description: Some(self.description),
            price: Some(self.price),
            discount_percentage: Some(self.discount_percentage),
            rating: Some(self.rating),
            stock: Some(self.stock),
            brand: Some(self.brand),
            category: Some(self.category),
            thumbnail: Some(self.thumbnail),
            images: Some(self.images),
        }
    }
}

impl From<&Product> for ProductForm {
    fn from(p: &Product) -> Self {
        Self {
            title: p.title.clone(),
            description: p.description.clone(),
            price: p.price,
            discount_percentage: p.discount_percentage,
            rating: p.rating,
            stock: p.stock,
            brand: p.brand.clone(),
            category: p.category.clone(),
            thumbnail: p.thumbnail.clone(),
            images: p.images.clone(),
        }
    }
}

/// Flat user form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
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
    pub hair_color: String,
    pub hair_type: String,

    pub address_address: String,
    pub address_city: String,
    pub address_state: String,
    pub address_postal_code: String,
    pub address_lat: f64,
    pub address_lng: f64,

    pub company_name: String,
    pub company_title: String,
    pub company_department: String,
    pub company_address_address: String,
    pub company_address_city: String,
    pub company_address_state: String,
    pub company_address_postal_code: String,
    pub company_address_lat: f64,
    pub company_address_lng: f64,

    pub bank_card_type: String,
    pub bank_card_number: String,
    pub bank_card_expire: String,
    pub bank_currency: String,
    pub bank_iban: String,

    pub domain: String,
    pub ip: String,
    pub mac_address: String,
    pub university: String,
    pub ein: String,
    pub ssn: String,
    pub user_agent: String,
}

impl UserForm {
    pub fn sample() -> Self {
        Self {
            first_name: "Mehmet".into(),
            last_name: "Özkan".into(),
            maiden_name: "Yıldız".into(),
            age: 32,
            gender: Gender::Male,
            email: "mehmet.ozkan@example.com".into(),
            phone: "+90 532 456 7890".into(),
            username: "mehmetozkan".into(),
            password: "Güvenli123!".into(),
            birth_date: NaiveDate::from_ymd_opt(1992, 6, 15).unwrap_or_default(),
            image: "https://robohash.org/MehmetOzkan.png?set=set4".into(),
            blood_group: "B+".into(),
            height: 182.0,
            weight: 78.0,
            eye_color: "Kahverengi".into(),
            hair_color: "Siyah".into(),
            hair_type: "Düz".into(),

            address_address: "Kadıköy Mahallesi, Moda Caddesi No: 45, Daire: 8".into(),
            address_city: "İstanbul".into(),
            address_state: "İstanbul".into(),
            address_postal_code: "34710".into(),
            address_lat: 40.9909,
            address_lng: 29.0303,

            company_name: "Teknoloji Çözümleri A.Ş.".into(),
            company_title: "Senior Full Stack Developer".into(),
            company_department: "Yazılım Geliştirme".into(),
            company_address_address: "Beşiktaş Mahallesi, Barbaros Bulvarı No: 123, Kat: 5"
                .into(),
            company_address_city: "İstanbul".into(),
            company_address_state: "İstanbul".into(),
            company_address_postal_code: "34353".into(),
            company_address_lat: 41.0422,
            company_address_lng: 29.0083,

            bank_card_type: "mastercard".into(),
            bank_card_number: "5555555555554444".into(),
            bank_card_expire: "12/26".into(),
            bank_currency: "TL".into(),
            bank_iban: "TR33 0001 0002 3456 7890 1234 59".into(),

            domain: "example.com".into(),
            ip: "192.168.1.100".into(),
            mac_address: "00:1B:44:11:3A:B7".into(),
            university: "İstanbul Teknik Üniversitesi".into(),
            ein: "12-3456789".into(),
            ssn: "123-45-6789".into(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".into(),
        }
    }

    fn hair(&self) -> Hair {
        Hair {
            color: self.hair_color.clone(),
            kind: self.hair_type.clone(),
        }
    }

    fn address(&self) -> Address {
        Address {
            address: self.address_address.clone(),
            city: self.address_city.clone(),
            coordinates: Coordinates {
                lat: self.address_lat,
                lng: self.address_lng,
            },
            postal_code: self.address_postal_code.clone(),
            state: self.address_state.clone(),
        }
    }

    fn company(&self) -> Company {
        Company {
            address: Address {
                address: self.company_address_address.clone(),
                city: self.company_address_city.clone(),
                coordinates: Coordinates {
                    lat: self.company_address_lat,
                    lng: self.company_address_lng,
                },
                postal_code: self.company_address_postal_code.clone(),
                state: self.company_address_state.clone(),
            },
            department: self.company_department.clone(),
            name: self.company_name.clone(),
            title: self.company_title.clone(),
        }
    }

    fn bank(&self) -> Bank {
        Bank {
            card_expire: self.bank_card_expire.clone(),
            card_number: self.bank_card_number.clone(),
            card_type: self.bank_card_type.clone(),
            currency: self.bank_currency.clone(),
            iban: self.bank_iban.clone(),
        }
    }

    pub fn into_new_user(self) -> NewUser {
        let (hair, address, company, bank) =
            (self.hair(), self.address(), self.company(), self.bank());
        NewUser {
            first_name: self.first_name,
            last_name: self.last_name,
            maiden_name: self.maiden_name,
            age: self.age,
            gender: self.gender,
            email: self.email,
            phone: self.phone,
            username: self.username,
            password: self.password,
            birth_date: self.birth_date,
            image: self.image,
            blood_group: self.blood_group,
            height: self.height,
            weight: self.weight,
            eye_color: self.eye_color,
            hair,
            domain: self.domain,
            ip: self.ip,
            address,
            mac_address: self.mac_address,
            university: self.university,
            bank,
            company,
            ein: self.ein,
            ssn: self.ssn,
            user_agent: self.user_agent,
        }
    }

    /// A patch that overwrites every form field of user `id`.
    pub fn into_patch(self, id: RecordId) -> UserPatch {
        let n = self.into_new_user();
        UserPatch {
            id,
            first_name: Some(n.first_name),
            last_name: Some(n.last_name),
            maiden_name: Some(n.maiden_name),
            age: Some(n.age),
            gender: Some(n.gender),
            email: Some(n.email),
            phone: Some(n.phone),
            username: Some(n.username),
            password: Some(n.password),
            birth_date: Some(n.birth_date),
            image: Some(n.image),
            blood_group: Some(n.blood_group),
            height: Some(n.height),
            weight: Some(n.weight),
            eye_color: Some(n.eye_color),
            hair: Some(n.hair),
            domain: Some(n.domain),
            ip: Some(n.ip),
            address: Some(n.address),
            mac_address: Some(n.mac_address),
            university: Some(n.university),
            bank: Some(n.bank),
            company: Some(n.company),
            ein: Some(n.ein),
            ssn: Some(n.ssn),
            user_agent: Some(n.user_agent),
        }
    }
}

impl From<&User> for UserForm {
    fn from(u: &User) -> Self {
        Self {
            first_name: u.first_name.clone(),
            last_name: u.last_name.clone(),
            maiden_name: u.maiden_name.clone(),
            age: u.age,
            gender: u.gender,
            email: u.email.clone(),
            phone: u.phone.clone(),
            username: u.username.clone(),
            password: u.password.clone(),
            birth_date: u.birth_date,
            image: u.image.clone(),
            blood_group: u.blood_group.clone(),
            height: u.height,
            weight: u.weight,
            eye_color: u.eye_color.clone(),
            hair_color: u.hair.color.clone(),
            hair_type: u.hair.kind.clone(),

            address_address: u.address.address.clone(),
            address_city: u.address.city.clone(),
            address_state: u.address.state.clone(),
            address_postal_code: u.address.postal_code.clone(),
            address_lat: u.address.coordinates.lat,
            address_lng: u.address.coordinates.lng,

            company_name: u.company.name.clone(),
            company_title: u.company.title.clone(),
            company_department: u.company.department.clone(),
            company_address_address: u.company.address.address.clone(),
            company_address_city: u.company.address.city.clone(),
            company_address_state: u.company.address.state.clone(),
            company_address_postal_code: u.company.address.postal_code.clone(),
            company_address_lat: u.company.address.coordinates.lat,
            company_address_lng: u.company.address.coordinates.lng,

            bank_card_type: u.bank.card_type.clone(),
            bank_card_number: u.bank.card_number.clone(),
            bank_card_expire: u.bank.card_expire.clone(),
            bank_currency: u.bank.currency.clone(),
            bank_iban: u.bank.iban.clone(),

            domain: u.domain.clone(),
            ip: u.ip.clone(),
            mac_address: u.mac_address.clone(),
            university: u.university.clone(),
            ein: u.ein.clone(),
            ssn: u.ssn.clone(),
            user_agent: u.user_agent.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::store::seed;
    use chrono::Utc;

    #[test]
    fn flattening_user_keeps_nested_values() {
        let user = seed::users().remove(0);
        let form = UserForm::from(&user);

        assert_eq!(form.address_city, "İstanbul");
        assert_eq!(form.company_address_postal_code, "34330");
        assert_eq!(form.company_address_lat, 41.0782);
        assert_eq!(form.bank_card_type, "maestro");
        assert_eq!(form.hair_type, "Düz");
    }

    #[test]
    fn nesting_form_rebuilds_sub_objects() {
        let new_user = UserForm::sample().into_new_user();

        assert_eq!(new_user.address.coordinates.lat, 40.9909);
        assert_eq!(new_user.address.postal_code, "34710");
        assert_eq!(new_user.company.address.city, "İstanbul");
        assert_eq!(new_user.company.title, "Senior Full Stack Developer");
        assert_eq!(new_user.bank.iban, "TR33 0001 0002 3456 7890 1234 59");
        assert_eq!(new_user.hair.color, "Siyah");
    }

    #[test]
    fn flatten_then_nest_preserves_user() {
        let user = seed::users().remove(1);
        let rebuilt = User::build(
            user.id,
            UserForm::from(&user).into_new_user(),
            user.created_at,
        );
        assert_eq!(rebuilt, user);
    }

    #[test]
    fn user_patch_from_form_overwrites_everything() {
        let mut user = seed::users().remove(0);
        let form = UserForm::sample();
        user.apply(form.clone().into_patch(user.id), Utc::now());
        assert_eq!(UserForm::from(&user), form);
    }

    #[test]
    fn product_form_round_trip() {
        let product = crate::store::seed::products().remove(3);
        let form = ProductForm::from(&product);
        let rebuilt = Product::build(product.id, form.clone().into_new_product(), product.created_at);
        assert_eq!(rebuilt, product);

        let patch = form.into_patch(product.id);
        assert_eq!(patch.id, 4);
        assert_eq!(patch.title.as_deref(), Some("MacBook Pro"));
    }

    #[test]
    fn user_form_json_is_flat_camel_case() {
        let json = serde_json::to_value(UserForm::sample()).unwrap();
        assert_eq!(json["companyAddressCity"], "İstanbul");
        assert_eq!(json["bankCardExpire"], "12/26");
    }
}
