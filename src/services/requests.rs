/// Request builders for the recommendations API
///
/// Pure functions from form-derived values to `ApiRequest`s. Nothing here
/// touches the view or the network.
use reqwest::Method;

use crate::{
    models::{Action, RecommendationRecord},
    services::transport::ApiRequest,
};

pub const COLLECTION_PATH: &str = "/api/recommendations";

/// Path segment used when the id field did not coerce to an integer
const NAN_SEGMENT: &str = "NaN";

fn record_path(id_segment: &str) -> String {
    format!("{}/{}", COLLECTION_PATH, urlencoding::encode(id_segment))
}

fn coerced_id_segment(record: &RecommendationRecord) -> String {
    record
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| NAN_SEGMENT.to_string())
}

/// POST the full record to the collection
pub fn create_request(record: &RecommendationRecord) -> ApiRequest {
    ApiRequest::new(Method::POST, COLLECTION_PATH).with_body(record.clone())
}

/// PUT the full record to `/{id}`
pub fn update_request(record: &RecommendationRecord) -> ApiRequest {
    ApiRequest::new(Method::PUT, record_path(&coerced_id_segment(record)))
        .with_body(record.clone())
}

/// PUT the full record to `/{id}/like`
pub fn like_request(record: &RecommendationRecord) -> ApiRequest {
    let path = format!("{}/like", record_path(&coerced_id_segment(record)));
    ApiRequest::new(Method::PUT, path).with_body(record.clone())
}

/// PUT the full record to `/{id}/unlike`
pub fn unlike_request(record: &RecommendationRecord) -> ApiRequest {
    let path = format!("{}/unlike", record_path(&coerced_id_segment(record)));
    ApiRequest::new(Method::PUT, path).with_body(record.clone())
}

/// Request for one of the four record-writing actions, `None` for the rest
pub fn mutation_request(action: Action, record: &RecommendationRecord) -> Option<ApiRequest> {
    match action {
        Action::Create => Some(create_request(record)),
        Action::Update => Some(update_request(record)),
        Action::Like => Some(like_request(record)),
        Action::Unlike => Some(unlike_request(record)),
        _ => None,
    }
}

/// GET `/{id}` using the id field exactly as typed
pub fn retrieve_request(raw_id: &str) -> ApiRequest {
    ApiRequest::new(Method::GET, record_path(raw_id))
}

/// DELETE `/{id}` using the id field exactly as typed
pub fn delete_request(raw_id: &str) -> ApiRequest {
    ApiRequest::new(Method::DELETE, record_path(raw_id))
}

/// Query string for a search.
///
/// `product_id` comes before `rec_type`; an empty field is left out entirely
/// and the two are joined by a single `&` only when both are present.
pub fn search_query(product_id: &str, rec_type: &str) -> String {
    [("product_id", product_id), ("rec_type", rec_type)]
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// GET the collection, filtered by whichever of the two fields are set
pub fn search_request(product_id: &str, rec_type: &str) -> ApiRequest {
    ApiRequest::new(Method::GET, COLLECTION_PATH).with_query(search_query(product_id, rec_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: Option<i64>) -> RecommendationRecord {
        RecommendationRecord {
            id,
            product_id: Some(12),
            product_name: "Kettle".to_string(),
            rec_id: Some(34),
            rec_name: "Mug".to_string(),
            rec_type: "BUY_WITH".to_string(),
            like_num: Some(2),
        }
    }

    #[test]
    fn test_create_posts_full_record_to_collection() {
        let request = create_request(&record(None));

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/api/recommendations");
        assert_eq!(request.query, None);
        assert_eq!(request.body, Some(record(None)));
    }

    #[test]
    fn test_update_uses_id_in_path_and_body() {
        let request = update_request(&record(Some(8)));

        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "/api/recommendations/8");
        assert_eq!(request.body.as_ref().and_then(|r| r.id), Some(8));
    }

    #[test]
    fn test_like_and_unlike_paths() {
        assert_eq!(
            like_request(&record(Some(3))).path,
            "/api/recommendations/3/like"
        );
        assert_eq!(
            unlike_request(&record(Some(3))).path,
            "/api/recommendations/3/unlike"
        );
        assert_eq!(like_request(&record(Some(3))).method, Method::PUT);
        assert_eq!(
            unlike_request(&record(Some(3))).body,
            Some(record(Some(3)))
        );
    }

    #[test]
    fn test_non_numeric_id_renders_nan_segment() {
        assert_eq!(
            update_request(&record(None)).path,
            "/api/recommendations/NaN"
        );
        assert_eq!(
            like_request(&record(None)).path,
            "/api/recommendations/NaN/like"
        );
    }

    #[test]
    fn test_mutation_request_covers_only_writes() {
        assert_eq!(
            mutation_request(Action::Create, &record(None)),
            Some(create_request(&record(None)))
        );
        assert!(mutation_request(Action::Unlike, &record(Some(1))).is_some());
        assert_eq!(mutation_request(Action::Retrieve, &record(Some(1))), None);
        assert_eq!(mutation_request(Action::Search, &record(Some(1))), None);
    }

    #[test]
    fn test_retrieve_and_delete_use_raw_id() {
        let retrieve = retrieve_request("42");
        assert_eq!(retrieve.method, Method::GET);
        assert_eq!(retrieve.path, "/api/recommendations/42");
        assert_eq!(retrieve.body, None);

        let delete = delete_request("42");
        assert_eq!(delete.method, Method::DELETE);
        assert_eq!(delete.path, "/api/recommendations/42");
        assert_eq!(delete.body, None);
    }

    #[test]
    fn test_raw_id_is_path_encoded() {
        assert_eq!(
            retrieve_request("1/like").path,
            "/api/recommendations/1%2Flike"
        );
    }

    #[test]
    fn test_search_query_both_filters() {
        assert_eq!(search_query("7", "up-sell"), "product_id=7&rec_type=up-sell");
    }

    #[test]
    fn test_search_query_omits_empty_product_id() {
        assert_eq!(search_query("", "cross-sell"), "rec_type=cross-sell");
    }

    #[test]
    fn test_search_query_omits_empty_rec_type() {
        assert_eq!(search_query("7", ""), "product_id=7");
    }

    #[test]
    fn test_search_without_filters_lists_all() {
        let request = search_request("", "");
        assert_eq!(search_query("", ""), "");
        assert_eq!(request.query, None);
        assert_eq!(request.target(), "/api/recommendations");
    }

    #[test]
    fn test_search_query_encodes_values() {
        assert_eq!(search_query("", "a&b c"), "rec_type=a%26b%20c");
    }
}
