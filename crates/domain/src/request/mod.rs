//! HTTP Request domain types

mod call;
mod header;
mod method;
mod query;
mod spec;

pub use call::{ApiRequest, PreparedRequest};
pub use header::{Header, Headers};
pub use method::HttpMethod;
pub use query::{QueryParam, QueryParams};
pub use spec::RequestSpec;
