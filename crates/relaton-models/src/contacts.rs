//! Contact information for people and organizations

use serde::{Deserialize, Serialize};

use crate::one_or_many;

/// One way of reaching a person or organization
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMethod {
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl ContactMethod {
    pub fn with_address(address: Address) -> Self {
        Self {
            address: Some(address),
            ..Default::default()
        }
    }

    /// The address, if it is usable as a postal address (has a country)
    pub fn postal_address(&self) -> Option<&Address> {
        self.address
            .as_ref()
            .filter(|a| a.country.as_deref().is_some_and(|c| !c.is_empty()))
    }
}

/// Postal address
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, deserialize_with = "one_or_many")]
    pub street: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
}

impl Address {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: Some(country.into()),
            ..Default::default()
        }
    }

    /// Builder method to set the city
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }
}
