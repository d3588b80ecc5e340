//! Supplier rows and their payloads, managed by [`crate::supplier_actor`].

use crate::error::StoreError;
use crate::occ::VersionedEntity;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Suppliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub u32);

impl From<u32> for SupplierId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SupplierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "supplier_{}", self.0)
    }
}

/// A supplier of products.
///
/// Unlike products, enabling or disabling a supplier always requires the caller's version
/// token; see [`crate::supplier_actor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: bool,
    pub version: i64,
}

impl Supplier {
    /// Creates a new, enabled Supplier at version 1.
    pub fn new(
        id: SupplierId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            status: true,
            version: 1,
        }
    }

    pub fn from_create(id: SupplierId, params: SupplierCreate) -> Result<Self, StoreError> {
        validate_name(&params.name)?;
        let mut supplier = Self::new(id, params.name, params.email, params.phone);
        supplier.status = params.status.unwrap_or(true);
        Ok(supplier)
    }

    pub fn with_fields(mut self, fields: SupplierFields) -> Result<Self, StoreError> {
        if let Some(name) = fields.name {
            validate_name(&name)?;
            self.name = name;
        }
        if let Some(email) = fields.email {
            self.email = email;
        }
        if let Some(phone) = fields.phone {
            self.phone = phone;
        }
        Ok(self)
    }
}

fn validate_name(name: &str) -> Result<(), StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation("supplier name must not be blank".into()));
    }
    Ok(())
}

impl VersionedEntity for Supplier {
    fn version(&self) -> i64 {
        self.version
    }
    fn set_version(&mut self, version: i64) {
        self.version = version;
    }
    fn status(&self) -> bool {
        self.status
    }
    fn set_status(&mut self, status: bool) {
        self.status = status;
    }
}

/// Payload for creating a Supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierCreate {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub status: Option<bool>,
}

/// Editable Supplier fields. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplierFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// An update request: the version the caller read, plus the fields to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierUpdate {
    pub version: i64,
    pub fields: SupplierFields,
}
