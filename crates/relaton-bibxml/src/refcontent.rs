//! Locality rendering for `<refcontent>`

use relaton_models::Extent;

/// Render an item's extent as a descriptive locator string, e.g.
/// `"Container Title, vol. 1, no. 2, pp. 3"`.
///
/// Locality types other than container title, volume, issue and page are
/// skipped. Returns an empty string when nothing is renderable.
pub fn build_refcontent_string(extent: &Extent) -> String {
    extent
        .localities()
        .iter()
        .filter_map(|locality| {
            let value = &locality.reference_from;
            match locality.locality_type.as_str() {
                "container-title" => Some(value.clone()),
                "volume" => Some(format!("vol. {}", value)),
                "issue" => Some(format!("no. {}", value)),
                "page" => Some(format!("pp. {}", value)),
                _ => None,
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use relaton_models::{Locality, LocalityStack};

    #[test]
    fn test_full_stack() {
        let extent = Extent::from(vec![
            Locality::new("container-title", "Container Title"),
            Locality::new("volume", "1"),
            Locality::new("issue", "2"),
            Locality::new("page", "3"),
        ]);
        assert_eq!(
            build_refcontent_string(&extent),
            "Container Title, vol. 1, no. 2, pp. 3"
        );
    }

    #[test]
    fn test_single_locality() {
        let extent = Extent::from(Locality::new("container-title", "Container Title"));
        assert_eq!(build_refcontent_string(&extent), "Container Title");

        let extent = Extent::from(Locality::new("volume", "7"));
        assert_eq!(build_refcontent_string(&extent), "vol. 7");
    }

    #[test]
    fn test_unknown_types_are_skipped() {
        let extent = Extent::from(vec![
            Locality::new("chapter", "4"),
            Locality::new("page", "10-12"),
        ]);
        assert_eq!(build_refcontent_string(&extent), "pp. 10-12");
    }

    #[test]
    fn test_empty_stack() {
        let extent = Extent::Stack(LocalityStack::default());
        assert_eq!(build_refcontent_string(&extent), "");
    }
}
