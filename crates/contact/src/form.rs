use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::{Validate, ValidationError};

/// Offering picked in the contact form select. Serialized as its French label.
#[derive(EnumString, Display, VariantArray, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceChoice {
    #[default]
    #[strum(serialize = "Application web")]
    WebApplication,
    #[strum(serialize = "Site vitrine")]
    Showcase,
    #[strum(serialize = "Installation Office / Windows")]
    OfficeWindows,
    #[strum(serialize = "Logo / Flyers")]
    LogoFlyers,
    #[strum(serialize = "Autre")]
    Other,
}

#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Service,
    Message,
}

/// A typed field write. Built from raw input with [`FieldUpdate::parse`].
#[derive(Clone, Debug, PartialEq)]
pub enum FieldUpdate {
    Name(String),
    Email(String),
    Service(ServiceChoice),
    Message(String),
}

impl FieldUpdate {
    pub fn parse(field: Field, value: impl Into<String>) -> crate::Result<Self> {
        let value = value.into();

        Ok(match field {
            Field::Name => Self::Name(value),
            Field::Email => Self::Email(value),
            Field::Message => Self::Message(value),
            Field::Service => match ServiceChoice::from_str(&value) {
                Ok(choice) => Self::Service(choice),
                Err(_) => return Err(crate::Error::UnknownService(value)),
            },
        })
    }
}

#[derive(Validate, Default, Clone, Debug, PartialEq)]
pub struct ContactFormState {
    #[validate(length(min = 1, max = 120), custom(function = "not_blank"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub service: ServiceChoice,
    #[validate(length(min = 1, max = 5000), custom(function = "not_blank"))]
    pub message: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

impl ContactFormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Service => self.service.as_ref(),
            Field::Message => &self.message,
        }
    }

    pub(crate) fn set(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(v) => self.name = v,
            FieldUpdate::Email(v) => self.email = v,
            FieldUpdate::Service(v) => self.service = v,
            FieldUpdate::Message(v) => self.message = v,
        }
    }
}
