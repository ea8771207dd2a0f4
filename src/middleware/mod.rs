//! 응답 미들웨어
//!
//! 백엔드 응답이 클라이언트로 전달되기 전에 순서대로 적용됩니다.

pub mod chain;
pub mod dedup;
pub mod error;
pub mod response;
pub mod traits;

pub use chain::MiddlewareChain;
pub use dedup::HeaderDedupMiddleware;
pub use error::MiddlewareError;
pub use response::handle_middleware_error;
pub use traits::{Middleware, RequestContext};

use bytes::Bytes;
use http_body_util::Full;

pub type Response = hyper::Response<Full<Bytes>>;
