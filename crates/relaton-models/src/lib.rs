//! Relaton bibliographic item data model
//!
//! This crate provides the read-side model consumed by the bibxml serializer:
//! - BibliographicItem: one citation record, with relations to other items
//! - DocId: typed document identifiers (DOI, RFC, IEEE, ...)
//! - Contributor, Person, Organization: who wrote or published an item
//! - Title, GenericStringValue: localized, formatted strings
//! - Date: typed dates with relaxed (year/month/day) precision
//! - Locality, LocalityStack: where within a larger work an item sits
//!
//! Fields that may arrive as either a single value or a list are always
//! exposed as `Vec`s.

pub mod bibdata;
pub mod contacts;
pub mod dates;
pub mod links;
pub mod locality;
pub mod orgs;
pub mod people;
pub mod strings;

mod serde_util;

pub use bibdata::*;
pub use contacts::*;
pub use dates::*;
pub use links::*;
pub use locality::*;
pub use orgs::*;
pub use people::*;
pub use strings::*;

pub use serde_util::one_or_many;
