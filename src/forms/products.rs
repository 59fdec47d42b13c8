use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::dto::categories::CategoryDto;
use crate::dto::products::ProductDto;

const NAME_MIN_LENGTH: usize = 5;
const NAME_MAX_LENGTH: usize = 60;

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Length rule applied to the name as it will be stored, i.e. trimmed.
fn name_length(value: &str) -> Result<(), ValidationError> {
    let length = value.trim().chars().count();
    if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
        return Err(ValidationError::new("length")
            .with_message("must be between 5 and 60 characters".into()));
    }
    Ok(())
}

fn past_or_present(value: &NaiveDateTime) -> Result<(), ValidationError> {
    if *value > Utc::now().naive_utc() {
        return Err(
            ValidationError::new("future_date").with_message("must not be in the future".into())
        );
    }
    Ok(())
}

/// Product body accepted by `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(custom(function = "name_length"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub price: f64,
    #[validate(url(message = "must be a valid URL"))]
    pub img_url: String,
    #[validate(custom(function = "past_or_present"))]
    pub date: NaiveDateTime,
    #[serde(default)]
    pub categories: Vec<CategoryDto>,
}

#[derive(Debug, Error)]
pub enum ProductFormError {
    #[error("Product form validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for ProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<ProductForm> for ProductDto {
    type Error = ProductFormError;

    fn try_from(value: ProductForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            id: value.id,
            name: value.name.trim().to_string(),
            description: value.description,
            price: value.price,
            img_url: value.img_url,
            date: value.date,
            categories: value.categories,
        })
    }
}
