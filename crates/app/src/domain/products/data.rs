//! Products Data

use std::{
    collections::BTreeMap,
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    domain::products::records::{NewProductRecord, ProductRecord},
    timestamps,
};

/// Maximum number of characters in a product name.
pub const NAME_MAX_LENGTH: usize = 100;

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub price: Decimal,
}

impl NewProduct {
    /// Check the request-shape rules: name and SKU present, name length, positive price.
    ///
    /// # Errors
    ///
    /// Returns every violated rule keyed by field name.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.name, &self.sku, self.price)
    }

    pub(crate) fn into_record(self, created_at_utc: Timestamp) -> NewProductRecord {
        NewProductRecord {
            sku: self.sku,
            name: self.name,
            description: self.description,
            price: self.price,
            created_at_utc,
        }
    }
}

/// Product Update Data
///
/// Carries every mutable field; fields absent here (`id`, `created_at_utc`,
/// `is_deleted`) are taken from the stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub price: Decimal,
}

impl ProductUpdate {
    /// Same rules as [`NewProduct::validate`].
    ///
    /// # Errors
    ///
    /// Returns every violated rule keyed by field name.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.name, &self.sku, self.price)
    }

    /// Build the replacement record from the stored one.
    pub(crate) fn apply_to(self, existing: &ProductRecord, now: Timestamp) -> ProductRecord {
        ProductRecord {
            id: existing.id,
            sku: self.sku,
            name: self.name,
            description: self.description,
            price: self.price,
            created_at_utc: existing.created_at_utc,
            updated_at_utc: Some(timestamps::next_update_timestamp(
                now,
                existing.created_at_utc,
                existing.updated_at_utc,
            )),
            is_deleted: existing.is_deleted,
        }
    }
}

fn validate_fields(name: &str, sku: &str, price: Decimal) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if name.trim().is_empty() {
        errors.add("name", "Name is required.");
    } else if name.chars().count() > NAME_MAX_LENGTH {
        errors.add(
            "name",
            format!("Name must be at most {NAME_MAX_LENGTH} characters."),
        );
    }

    if sku.trim().is_empty() {
        errors.add("sku", "Sku is required.");
    }

    if price <= Decimal::ZERO {
        errors.add("price", "Price must be greater than 0.");
    }

    errors.into_result()
}

/// Field-level validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded against `field`, if any.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        self.0
            .iter()
            .map(|(field, messages)| (*field, messages.as_slice()))
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;

        for (field, messages) in self.iter() {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }

                write!(f, "{field}: {message}")?;
                first = false;
            }
        }

        Ok(())
    }
}

impl Error for ValidationErrors {}
