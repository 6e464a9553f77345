//! Property-based tests for the serializer

use proptest::prelude::*;
use relaton_bibxml::{
    create_author, get_suitable_target, select_anchor, serialize, serialize_to_string,
    SerializeError,
};
use relaton_models::{BibliographicItem, Contributor, DocId, Organization};

proptest! {
    #[test]
    fn test_anchor_priority(
        entries in prop::collection::vec(("[A-Za-z0-9]{1,8}", any::<bool>(), any::<bool>()), 1..6)
    ) {
        let docids: Vec<DocId> = entries
            .iter()
            .map(|(id, primary, scoped)| {
                let docid = DocId::new(id.as_str(), "type").with_primary(*primary);
                if *scoped { docid.with_scope("anchor") } else { docid }
            })
            .collect();

        let expected = entries
            .iter()
            .find(|(_, _, scoped)| *scoped)
            .or_else(|| entries.iter().find(|(_, primary, _)| *primary))
            .unwrap_or(&entries[0])
            .0
            .clone();

        prop_assert_eq!(select_anchor(&docids).unwrap(), expected);
    }

    #[test]
    fn test_serialize_is_idempotent(
        title in "[a-zA-Z ]{1,30}",
        number in 1u32..10000,
        year in 1900u32..2100,
    ) {
        let item = BibliographicItem::new(vec![DocId::new(format!("RFC {}", number), "IETF")])
            .with_title(title)
            .with_date("published", &year.to_string());

        prop_assert_eq!(serialize(&item, None).unwrap(), serialize(&item, None).unwrap());
        prop_assert_eq!(
            serialize_to_string(&item, None).unwrap(),
            serialize_to_string(&item, None).unwrap()
        );
    }

    #[test]
    fn test_publisher_organization_is_always_an_author(name in "[a-zA-Z ]{1,20}") {
        let contributor = Contributor::organization(Organization::new(name), &["publisher"]);
        prop_assert!(create_author(&contributor).is_ok());
    }

    #[test]
    fn test_roleless_contributor_is_never_an_author(name in "[a-zA-Z ]{1,20}") {
        let contributor = Contributor::organization(Organization::new(name), &[]);
        prop_assert!(matches!(create_author(&contributor), Err(SerializeError::Role(_))));
    }
}

#[test]
fn test_empty_inputs_not_found() {
    assert!(select_anchor(&[]).unwrap_err().is_not_found());
    assert!(get_suitable_target(&[]).unwrap_err().is_not_found());
}
