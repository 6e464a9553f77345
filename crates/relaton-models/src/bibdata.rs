//! Bibliographic item, its identifiers, contributors and relations

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{
    one_or_many, BiblioNote, Date, Extent, GenericStringValue, Link, Organization, Person, Title,
};

/// Typed document identifier.
///
/// May be given by the publisher or issued by a third-party system. `type`
/// determines the format of `id` and is compared case-insensitively.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocId {
    pub id: String,
    #[serde(rename = "type")]
    pub id_type: String,
    #[serde(default)]
    pub primary: Option<bool>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl DocId {
    pub fn new(id: impl Into<String>, id_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            id_type: id_type.into(),
            primary: None,
            scope: None,
        }
    }

    /// Builder method to mark the identifier as primary
    pub fn with_primary(mut self, primary: bool) -> Self {
        self.primary = Some(primary);
        self
    }

    /// Builder method to set the scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Case-insensitive type comparison
    pub fn is_type(&self, id_type: &str) -> bool {
        self.id_type.eq_ignore_ascii_case(id_type)
    }

    pub fn is_primary(&self) -> bool {
        self.primary == Some(true)
    }
}

/// Contributor role. Deserializes from a bare tag (`"author"`) too.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RoleRepr")]
pub struct Role {
    #[serde(rename = "type")]
    pub role_type: Option<String>,
    pub description: Vec<GenericStringValue>,
}

impl Role {
    pub fn new(role_type: impl Into<String>) -> Self {
        Self {
            role_type: Some(role_type.into()),
            description: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RoleRepr {
    Tag(String),
    Full {
        #[serde(default, rename = "type")]
        role_type: Option<String>,
        #[serde(default, deserialize_with = "one_or_many")]
        description: Vec<GenericStringValue>,
    },
}

impl From<RoleRepr> for Role {
    fn from(repr: RoleRepr) -> Self {
        match repr {
            RoleRepr::Tag(tag) => Role::new(tag),
            RoleRepr::Full {
                role_type,
                description,
            } => Role {
                role_type,
                description,
            },
        }
    }
}

/// Anyone who helped create or publish the document
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    #[serde(default, deserialize_with = "one_or_many")]
    pub role: Vec<Role>,
    #[serde(default)]
    pub person: Option<Person>,
    #[serde(default)]
    pub organization: Option<Organization>,
}

impl Contributor {
    pub fn person(person: Person, roles: &[&str]) -> Self {
        Self {
            role: roles.iter().map(|r| Role::new(*r)).collect(),
            person: Some(person),
            organization: None,
        }
    }

    pub fn organization(organization: Organization, roles: &[&str]) -> Self {
        Self {
            role: roles.iter().map(|r| Role::new(*r)).collect(),
            person: None,
            organization: Some(organization),
        }
    }

    /// Role tags, skipping roles without a type
    pub fn role_tags(&self) -> impl Iterator<Item = &str> {
        self.role.iter().filter_map(|r| r.role_type.as_deref())
    }

    pub fn has_role(&self, tag: &str) -> bool {
        self.role_tags().any(|r| r == tag)
    }
}

/// A series that the document belongs to
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub formattedref: Option<GenericStringValue>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub title: Vec<GenericStringValue>,
    #[serde(default)]
    pub abbrev: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub run: Option<String>,
    #[serde(default)]
    pub partnumber: Option<String>,
    #[serde(default, rename = "type")]
    pub series_type: Option<String>,
}

impl Series {
    pub fn new(title: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            title: vec![GenericStringValue::new(title)],
            number: Some(number.into()),
            ..Default::default()
        }
    }
}

/// Describes a version, used for drafts
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    #[serde(default, deserialize_with = "draft_value")]
    pub draft: Option<String>,
}

impl VersionInfo {
    /// Whether this entry names a draft version
    pub fn is_draft(&self) -> bool {
        self.draft.as_deref().is_some_and(|d| !d.is_empty())
    }
}

// Draft markers appear as strings ("03"), numbers or plain `true`.
fn draft_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) | Some(serde_json::Value::Bool(false)) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    pub content: String,
    #[serde(default)]
    pub number: Option<String>,
}

/// Relationship from one bibliographic item to another
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    #[serde(rename = "type")]
    pub relation_type: String,
    pub bibitem: Box<BibliographicItem>,
    #[serde(default)]
    pub description: Option<GenericStringValue>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Relation {
    pub fn new(relation_type: impl Into<String>, bibitem: BibliographicItem) -> Self {
        Self {
            relation_type: relation_type.into(),
            bibitem: Box::new(bibitem),
            description: None,
            extra: BTreeMap::new(),
        }
    }

    /// An `includes` relation marks this item as a container
    pub fn is_includes(&self) -> bool {
        self.relation_type == "includes"
    }
}

/// Relaton's primary entity, one citation record.
///
/// `docid` is the only field guaranteed to be present in well-formed input.
/// Fields the model does not know about are kept in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BibliographicItem {
    #[serde(default, deserialize_with = "one_or_many")]
    pub docid: Vec<DocId>,

    #[serde(default)]
    pub formattedref: Option<GenericStringValue>,
    #[serde(default)]
    pub docnumber: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub language: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub script: Vec<String>,
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub doctype: Option<String>,

    #[serde(default, deserialize_with = "one_or_many")]
    pub title: Vec<Title>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub date: Vec<Date>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub link: Vec<Link>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub contributor: Vec<Contributor>,
    #[serde(default, rename = "abstract", deserialize_with = "one_or_many")]
    pub abstract_: Vec<GenericStringValue>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub series: Vec<Series>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub relation: Vec<Relation>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub version: Vec<VersionInfo>,
    #[serde(default)]
    pub extent: Option<Extent>,

    #[serde(default)]
    pub edition: Option<Edition>,
    #[serde(default)]
    pub fetched: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub revdate: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub biblionote: Vec<BiblioNote>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub place: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub keyword: Vec<String>,

    /// Fields not covered by the model
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl BibliographicItem {
    pub fn new(docid: Vec<DocId>) -> Self {
        Self {
            docid,
            ..Default::default()
        }
    }

    /// Builder method to add a title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title.push(Title::new(title));
        self
    }

    /// Builder method to add a contributor
    pub fn with_contributor(mut self, contributor: Contributor) -> Self {
        self.contributor.push(contributor);
        self
    }

    /// Builder method to add a date
    pub fn with_date(mut self, date_type: &str, value: &str) -> Self {
        self.date.push(Date::new(date_type, value));
        self
    }

    /// Builder method to add a link
    pub fn with_link(mut self, link: Link) -> Self {
        self.link.push(link);
        self
    }

    /// Builder method to add an abstract
    pub fn with_abstract(mut self, abstract_: GenericStringValue) -> Self {
        self.abstract_.push(abstract_);
        self
    }

    /// Builder method to add a series
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Builder method to add a relation
    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relation.push(relation);
        self
    }

    /// Builder method to set the extent
    pub fn with_extent(mut self, extent: impl Into<Extent>) -> Self {
        self.extent = Some(extent.into());
        self
    }

    /// Builder method to add a version entry
    pub fn with_version(mut self, version: VersionInfo) -> Self {
        self.version.push(version);
        self
    }

    /// Items related through an `includes` relation
    pub fn included_items(&self) -> impl Iterator<Item = &BibliographicItem> {
        self.relation
            .iter()
            .filter(|r| r.is_includes())
            .map(|r| r.bibitem.as_ref())
    }

    /// Whether any version entry names a draft
    pub fn has_draft_version(&self) -> bool {
        self.version.iter().any(VersionInfo::is_draft)
    }
}
