// src/api/types.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Response of `POST /api/search`. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_filters: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<Card>>,
}

impl SearchResponse {
    /// Wraps a bare card list the way an all-properties answer is shown.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            extracted_filters: None,
            summary: None,
            cards: Some(cards),
        }
    }

    /// Summary text, treating an empty string as absent.
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }
}

/// One property listing as the server sends it.
///
/// Nothing here is validated. Every field accepts any JSON value so one odd
/// listing cannot make the rest of a response undecodable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default)]
    pub project_name: Option<Value>,
    #[serde(default)]
    pub full_address: Option<Value>,
    #[serde(default)]
    pub landmark: Option<Value>,
    #[serde(default)]
    pub bhk: Option<Value>,
    #[serde(default)]
    pub bathrooms: Option<Value>,
    #[serde(default)]
    pub balcony: Option<Value>,
    #[serde(default)]
    pub property_type: Option<Value>,
    #[serde(default)]
    pub furnished_type: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub cta_slug: Option<Value>,

    /// Fields the server adds that the card view does not know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_response_camel_case() {
        let body = json!({
            "extractedFilters": { "bhk": 2, "city": "Mumbai" },
            "summary": "Found 1 property",
            "cards": [{
                "projectName": "Ashwini Apartments",
                "fullAddress": "Chembur, Mumbai",
                "bhk": "1BHK",
                "bathrooms": 1,
                "price": 11000000,
                "ctaSlug": "ashwini-apartments",
                "projectId": 42
            }]
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.summary_text(), Some("Found 1 property"));
        assert_eq!(response.extracted_filters.as_ref().unwrap()["city"], "Mumbai");

        let cards = response.cards.unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].project_name, Some(json!("Ashwini Apartments")));
        assert_eq!(cards[0].bhk, Some(json!("1BHK")));
        assert_eq!(cards[0].price, Some(json!(11000000)));
        assert_eq!(cards[0].cta_slug, Some(json!("ashwini-apartments")));
        assert_eq!(cards[0].extra.get("projectId"), Some(&json!(42)));
    }

    #[test]
    fn test_empty_response_and_nulls() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, SearchResponse::default());

        let card: Card = serde_json::from_value(json!({
            "projectName": null,
            "bathrooms": null,
            "price": null
        }))
        .unwrap();
        assert!(card.project_name.is_none());
        assert!(card.bathrooms.is_none());
        assert!(card.price.is_none());
    }

    #[test]
    fn test_odd_card_fields_do_not_fail_the_response() {
        let body = r#"{
            "summary": "2 matches",
            "cards": [
                { "projectName": "Om Makarand Heights", "price": 14000000 },
                { "projectName": 1042, "price": "1.4 Cr", "status": ["Ready"] }
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.summary_text(), Some("2 matches"));
        let cards = response.cards.unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].project_name, Some(json!(1042)));
        assert_eq!(cards[1].price, Some(json!("1.4 Cr")));
    }

    #[test]
    fn test_empty_summary_is_absent() {
        let response = SearchResponse {
            summary: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(response.summary_text(), None);
    }

    #[test]
    fn test_request_body() {
        let body = serde_json::to_value(SearchRequest { query: "2BHK in Mulund".into() }).unwrap();
        assert_eq!(body, json!({ "query": "2BHK in Mulund" }));
    }
}
