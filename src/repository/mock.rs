//! Mock backend transport for isolating services in tests.

use mockall::mock;
use serde_json::Value;

use crate::repository::errors::RepositoryResult;
use crate::repository::{ApiRequest, ApiTransport};

mock! {
    pub Transport {}

    impl ApiTransport for Transport {
        async fn send(&self, request: ApiRequest) -> RepositoryResult<Value>;
    }
}

/// Renders a request as `METHOD path?query` for matching in expectations.
pub fn call(request: &ApiRequest) -> String {
    format!("{} {}", request.method.as_str(), request.path_and_query())
}
