//! Search Header Filter는 검색 엔드포인트 응답에서 중복된 헤더를 제거하는 HTTP 필터입니다.
//!
//! 검색 백엔드와 프록시 조합이 `Transfer-Encoding` 같은 헤더를 두 번 이상 보내면
//! 앞단의 로드 밸런서가 응답을 거부할 수 있습니다. 이 필터는 요청 경로가
//! 검색 엔드포인트 패턴과 매칭될 때만 설정된 헤더를 첫 번째 값 하나로 줄입니다.
//!
//! # 주요 기능
//!
//! - 정규식 기반 검색 엔드포인트 매칭 (시작 시 한 번 컴파일)
//! - 대소문자 구분 없는 헤더 중복 제거 (첫 번째 값 유지, 순서 보존)
//! - 검색 백엔드 앞에 두는 경량 프록시
//!
//! # 예제
//!
//! ```
//! use search_header_filter::filter::SearchFilter;
//! use search_header_filter::settings::FilterSettings;
//! use hyper::header::{HeaderMap, HeaderValue};
//!
//! let filter = SearchFilter::new(&FilterSettings::default()).unwrap();
//!
//! let mut headers = HeaderMap::new();
//! headers.append("transfer-encoding", HeaderValue::from_static("chunked"));
//! headers.append("transfer-encoding", HeaderValue::from_static("identity"));
//!
//! // 검색 엔드포인트가 아니면 그대로 둔다
//! assert_eq!(filter.apply("/health", &mut headers), 0);
//!
//! // 검색 엔드포인트면 첫 번째 값만 남긴다
//! assert_eq!(filter.apply("/context/api/v1/search", &mut headers), 1);
//! assert_eq!(headers["transfer-encoding"], "chunked");
//! ```
//!
//! # 설정
//!
//! ```
//! use search_header_filter::settings::Settings;
//!
//! let settings = Settings::from_toml_str(r#"
//!     [filter]
//!     endpoint_pattern = "(/[^/]+)?/api/v\\d+(/[^/]+)?/_?search$,/legacy/find$"
//!     dedup_headers = "Transfer-Encoding,Content-Length"
//! "#).unwrap();
//!
//! assert_eq!(settings.filter.endpoint_pattern.len(), 2);
//! ```

pub mod filter;
pub mod logging;
pub mod middleware;
pub mod proxy;
pub mod server;
pub mod settings;
