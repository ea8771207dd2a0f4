use hyper::header::{HeaderMap, HeaderValue};
use search_header_filter::filter::{
    DedupHeaderSet, EndpointPatternSet, FilterError, HeaderDeduplicator, PatternMatcher, SearchFilter,
};
use search_header_filter::settings::FilterSettings;

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items.iter().map(|(n, v)| (n.to_string(), v.to_string())).collect()
}

fn values<'a>(headers: &'a HeaderMap, name: &str) -> Vec<&'a str> {
    headers.get_all(name).iter().map(|v| v.to_str().unwrap()).collect()
}

#[test]
fn test_default_pattern_matching() {
    let matcher = PatternMatcher::new(&EndpointPatternSet::default()).unwrap();
    let test_cases = vec![
        // (경로, 예상 결과)
        ("/context/api/v1/search", true),
        ("/context/api/v1/index/_search", true),
        ("/api/v2/_search", true),
        ("/api/v1/search", true),
        ("/context/api/v1/index", false),
        ("/context/api/v1/index/query", false),
        ("/context/v1/search", false),
        ("/search", false),
        ("", false),
    ];

    for (path, expected) in test_cases {
        assert_eq!(matcher.matches(path), expected, "경로 '{}'", path);
    }
}

#[test]
fn test_multiple_patterns_or() {
    let set = EndpointPatternSet::parse(r"/only/this$, /api/v\d+/search$");
    let matcher = PatternMatcher::new(&set).unwrap();

    assert!(matcher.matches("/x/api/v3/search"));
    assert!(matcher.matches("/only/this"));
    assert!(!matcher.matches("/neither"));
}

#[test]
fn test_invalid_pattern_is_reported() {
    let set = EndpointPatternSet::parse(r"/api/v\d+/search$,[z-a]");
    let err = PatternMatcher::new(&set).unwrap_err();
    assert!(matches!(err, FilterError::InvalidPattern { ref pattern, .. } if pattern == "[z-a]"));
    assert!(err.to_string().contains("[z-a]"));
}

#[test]
fn test_dedup_is_idempotent() {
    let dedup = HeaderDeduplicator::new(DedupHeaderSet::parse("Transfer-Encoding,X-Dup"));
    let mut headers = HeaderMap::new();
    headers.append("transfer-encoding", HeaderValue::from_static("chunked"));
    headers.append("x-dup", HeaderValue::from_static("1"));
    headers.append("transfer-encoding", HeaderValue::from_static("chunked"));
    headers.append("x-dup", HeaderValue::from_static("2"));

    assert_eq!(dedup.deduplicate(&mut headers), 2);
    let once = headers.clone();
    assert_eq!(dedup.deduplicate(&mut headers), 0);
    assert_eq!(headers, once);

    let mut list = pairs(&[("X-Dup", "1"), ("x-dup", "2"), ("Other", "a")]);
    dedup.deduplicate_list(&mut list);
    let once = list.clone();
    assert_eq!(dedup.deduplicate_list(&mut list), 0);
    assert_eq!(list, once);
}

#[test]
fn test_case_insensitive_first_occurrence_wins() {
    let dedup = HeaderDeduplicator::new(DedupHeaderSet::parse("Transfer-encoding"));
    let mut list = pairs(&[
        ("Transfer-Encoding", "chunked"),
        ("transfer-encoding", "identity"),
    ]);

    dedup.deduplicate_list(&mut list);
    assert_eq!(list, pairs(&[("Transfer-Encoding", "chunked")]));
}

#[test]
fn test_non_target_headers_untouched() {
    let dedup = HeaderDeduplicator::new(DedupHeaderSet::default());
    let mut headers = HeaderMap::new();
    headers.append("set-cookie", HeaderValue::from_static("a=1"));
    headers.append("set-cookie", HeaderValue::from_static("b=2"));
    headers.append("transfer-encoding", HeaderValue::from_static("chunked"));

    assert_eq!(dedup.deduplicate(&mut headers), 0);
    assert_eq!(values(&headers, "set-cookie"), vec!["a=1", "b=2"]);

    let mut list = pairs(&[("Vary", "Accept"), ("Vary", "Origin")]);
    assert_eq!(dedup.deduplicate_list(&mut list), 0);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_order_is_preserved() {
    let dedup = HeaderDeduplicator::new(DedupHeaderSet::parse("A"));

    let mut list = pairs(&[("A", "1"), ("B", "2"), ("A", "3"), ("C", "4")]);
    dedup.deduplicate_list(&mut list);
    let names: Vec<_> = list.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    let mut headers = HeaderMap::new();
    headers.append("a", HeaderValue::from_static("1"));
    headers.append("b", HeaderValue::from_static("2"));
    headers.append("a", HeaderValue::from_static("3"));
    headers.append("c", HeaderValue::from_static("4"));
    dedup.deduplicate(&mut headers);
    let names: Vec<_> = headers.keys().map(|k| k.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(values(&headers, "a"), vec!["1"]);
}

fn scenario_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.append("transfer-encoding", HeaderValue::from_static("chunked"));
    headers.append("transfer-encoding", HeaderValue::from_static("identity"));
    headers.append("content-type", HeaderValue::from_static("application/json"));
    headers
}

#[test]
fn test_search_request_scenario() {
    let filter = SearchFilter::new(&FilterSettings::default()).unwrap();
    let mut headers = scenario_headers();

    assert!(filter.matcher().matches("/ctx/api/v1/search"));
    assert_eq!(filter.apply("/ctx/api/v1/search", &mut headers), 1);

    let result: Vec<_> = headers.iter()
        .map(|(n, v)| (n.as_str(), v.to_str().unwrap()))
        .collect();
    assert_eq!(result, vec![
        ("transfer-encoding", "chunked"),
        ("content-type", "application/json"),
    ]);
}

#[test]
fn test_non_search_request_scenario() {
    let filter = SearchFilter::new(&FilterSettings::default()).unwrap();
    let mut headers = scenario_headers();

    assert!(!filter.matcher().matches("/health"));
    assert_eq!(filter.apply("/health", &mut headers), 0);
    assert_eq!(values(&headers, "transfer-encoding"), vec!["chunked", "identity"]);
}

#[test]
fn test_filter_over_raw_header_list() {
    let filter = SearchFilter::new(&FilterSettings::default()).unwrap();
    let mut list = pairs(&[
        ("Transfer-Encoding", "chunked"),
        ("Transfer-Encoding", "identity"),
        ("Content-Type", "application/json"),
    ]);

    assert_eq!(filter.apply_list("/ctx/api/v1/search", &mut list), 1);
    assert_eq!(list, pairs(&[
        ("Transfer-Encoding", "chunked"),
        ("Content-Type", "application/json"),
    ]));
}
