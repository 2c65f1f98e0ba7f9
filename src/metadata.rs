use serde::{Deserialize, Serialize};

/// Link-preview metadata pulled from one HTML document's head.
///
/// Every field is independently optional: a missing source tag leaves the
/// field `None`, never an empty string. A record is a plain value with no
/// identity beyond structural equality, derived once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub url: Option<String>,
    pub site_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_absent() {
        let m = Metadata::default();
        assert_eq!(m.url, None);
        assert_eq!(m.site_name, None);
        assert_eq!(m.title, None);
        assert_eq!(m.description, None);
        assert_eq!(m.keywords, None);
        assert_eq!(m.author, None);
    }

    #[test]
    fn json_round_trip() {
        let m = Metadata {
            url: Some("https://stripe.com".into()),
            site_name: Some("Stripe".into()),
            title: Some("Stripe | Payments".into()),
            description: None,
            keywords: Some(vec!["payments".into(), "api".into()]),
            author: None,
        };
        let json = serde_json::to_string(&m).unwrap();
        let back: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn json_field_names() {
        let json = serde_json::to_value(Metadata::default()).unwrap();
        assert!(json.get("site_name").is_some());
        assert!(json.get("keywords").is_some());
    }
}
