use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::error::{ProductError, ProductResult};

/// Longest accepted product name, in characters.
pub const MAX_NAME_LENGTH: usize = 200;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Hex string of the MongoDB ObjectId
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub id: String,
    /// Product name
    #[schema(example = "Widget")]
    pub name: String,
    /// Unit price
    #[schema(example = 9.99)]
    pub price: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(custom(function = "screen_name"))]
    #[schema(example = "Widget")]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than zero"))]
    #[schema(example = 9.99)]
    pub price: f64,
}

/// DTO for updating an existing product. Both fields replace the stored values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(custom(function = "screen_name"))]
    #[schema(example = "Widget-2")]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than zero"))]
    #[schema(example = 12.5)]
    pub price: f64,
}

/// Trims `name` and checks it is non-empty and at most [`MAX_NAME_LENGTH`]
/// characters.
pub fn validate_name(name: &str) -> ProductResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProductError::Validation("name must not be empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ProductError::Validation(format!(
            "name must be at most {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(name.to_string())
}

/// `validator` hook for the wire DTOs. Applies the same rule as the core,
/// so the HTTP screen never rejects a name the service would accept.
fn screen_name(name: &str) -> Result<(), ValidationError> {
    validate_name(name).map(|_| ()).map_err(|e| {
        let mut error = ValidationError::new("name");
        if let ProductError::Validation(message) = e {
            error.message = Some(message.into());
        }
        error
    })
}

/// Checks name and price and returns the trimmed name.
///
/// Shared by every transport; the HTTP extractor screens with the same name
/// rule before the body reaches the service.
pub fn validate_fields(name: &str, price: f64) -> ProductResult<String> {
    let name = validate_name(name)?;
    // NaN fails every comparison, so check finiteness first
    if !price.is_finite() || price <= 0.0 {
        return Err(ProductError::Validation(
            "price must be a finite number greater than zero".to_string(),
        ));
    }
    Ok(name)
}

impl Product {
    /// Overwrites name and price. `id` and `created_at` are kept.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        self.name = update.name;
        self.price = update.price;
    }
}
