use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A tracked hardware/software asset. `tag` and `serial` are unique;
/// `assigned_user_name` references a user by name only, no foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Asset {
    pub id: i64,
    pub tag: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub asset_type: String,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial: Option<String>,
    pub assigned_user_name: Option<String>,
    pub status: String,
    pub cost: f64,
    pub discovered: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field bag for asset creation. Omitted optional fields take the
/// documented defaults: status "In Use", cost 0, discovered false.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAsset {
    pub tag: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial: Option<String>,
    pub assigned_user_name: Option<String>,
    pub status: Option<String>,
    pub cost: Option<f64>,
    pub discovered: Option<bool>,
}

/// Partial-update field bag: only present, non-null fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetPatch {
    pub tag: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial: Option<String>,
    pub assigned_user_name: Option<String>,
    pub status: Option<String>,
    pub cost: Option<f64>,
    pub discovered: Option<bool>,
}

impl AssetPatch {
    pub fn is_empty(&self) -> bool {
        self.tag.is_none()
            && self.asset_type.is_none()
            && self.manufacturer.is_none()
            && self.model.is_none()
            && self.serial.is_none()
            && self.assigned_user_name.is_none()
            && self.status.is_none()
            && self.cost.is_none()
            && self.discovered.is_none()
    }
}

/// Aggregate asset counts, computed in a single pass over the table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct AssetStats {
    pub total_assets: i64,
    pub in_use: i64,
    pub discovered: i64,
    pub retired: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct License {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub license_type: String,
    pub key: Option<String>,
    pub software_name: Option<String>,
    pub vendor: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub quantity: i64,
    pub status: String,
    pub cost: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Defaults for omitted fields: quantity 1, status "Active", cost 0.
#[derive(Debug, Clone, Deserialize)]
pub struct NewLicense {
    pub name: String,
    #[serde(rename = "type")]
    pub license_type: String,
    pub key: Option<String>,
    pub software_name: Option<String>,
    pub vendor: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub quantity: Option<i64>,
    pub status: Option<String>,
    pub cost: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LicensePatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub license_type: Option<String>,
    pub key: Option<String>,
    pub software_name: Option<String>,
    pub vendor: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub quantity: Option<i64>,
    pub status: Option<String>,
    pub cost: Option<f64>,
}

impl LicensePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.license_type.is_none()
            && self.key.is_none()
            && self.software_name.is_none()
            && self.vendor.is_none()
            && self.expiration_date.is_none()
            && self.quantity.is_none()
            && self.status.is_none()
            && self.cost.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub status: String,
    pub assigned_assets: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub assigned_assets: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub assigned_assets: Option<i64>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.department.is_none()
            && self.phone.is_none()
            && self.role.is_none()
            && self.status.is_none()
            && self.assigned_assets.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Contract {
    pub id: i64,
    pub name: String,
    pub vendor: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub contract_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub value: f64,
    pub status: String,
    pub renewal_date: Option<NaiveDate>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewContract {
    pub name: String,
    pub vendor: Option<String>,
    #[serde(rename = "type")]
    pub contract_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub value: Option<f64>,
    pub status: Option<String>,
    pub renewal_date: Option<NaiveDate>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractPatch {
    pub name: Option<String>,
    pub vendor: Option<String>,
    #[serde(rename = "type")]
    pub contract_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub value: Option<f64>,
    pub status: Option<String>,
    pub renewal_date: Option<NaiveDate>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
}

impl ContractPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.vendor.is_none()
            && self.contract_type.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.value.is_none()
            && self.status.is_none()
            && self.renewal_date.is_none()
            && self.contact_person.is_none()
            && self.contact_email.is_none()
    }
}
