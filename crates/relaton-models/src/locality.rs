//! Bibliographic locality: where within a larger work an item sits
//!
//! A sequence of localities indicates hierarchical ordering, from greater
//! to smaller (chapter, then page, then paragraph).

use serde::{Deserialize, Serialize};

/// One locator entry (`container-title`, `volume`, `issue`, `page`, ...)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locality {
    #[serde(rename = "type")]
    pub locality_type: String,
    pub reference_from: String,
    #[serde(default)]
    pub reference_to: Option<String>,
}

impl Locality {
    pub fn new(locality_type: impl Into<String>, reference_from: impl Into<String>) -> Self {
        Self {
            locality_type: locality_type.into(),
            reference_from: reference_from.into(),
            reference_to: None,
        }
    }
}

/// An ordered stack of nested localities
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalityStack {
    pub locality: Vec<Locality>,
}

/// Item extent: either a full stack or a single locality
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extent {
    Stack(LocalityStack),
    Single(Locality),
}

impl Extent {
    /// The localities in order; a single locality is a one-entry stack
    pub fn localities(&self) -> &[Locality] {
        match self {
            Extent::Stack(stack) => &stack.locality,
            Extent::Single(locality) => std::slice::from_ref(locality),
        }
    }
}

impl From<Locality> for Extent {
    fn from(locality: Locality) -> Self {
        Extent::Single(locality)
    }
}

impl From<Vec<Locality>> for Extent {
    fn from(locality: Vec<Locality>) -> Self {
        Extent::Stack(LocalityStack { locality })
    }
}
