use podsearch_feed::FlatRecord;
use serde::Serialize;

/// Envelope for the search operation of the inbound contract.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub results: Vec<FlatRecord>,
}

/// Envelope for the list-all operation of the inbound contract.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodesResponse {
    pub episodes: Vec<FlatRecord>,
}

impl From<Vec<FlatRecord>> for SearchResponse {
    fn from(results: Vec<FlatRecord>) -> Self {
        Self { results }
    }
}

impl From<Vec<FlatRecord>> for EpisodesResponse {
    fn from(episodes: Vec<FlatRecord>) -> Self {
        Self { episodes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelopes_serialize_with_contract_field_names() {
        let mut record = FlatRecord::new();
        record.insert("title", "Ep");

        let search = SearchResponse::from(vec![record.clone()]);
        assert_eq!(
            serde_json::to_value(&search).expect("serialize search"),
            json!({"results": [{"title": "Ep"}]})
        );

        let episodes = EpisodesResponse::from(vec![record]);
        assert_eq!(
            serde_json::to_value(&episodes).expect("serialize episodes"),
            json!({"episodes": [{"title": "Ep"}]})
        );
    }
}
