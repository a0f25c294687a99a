//! Request execution pipeline: spec construction, retry policy and the
//! authenticated executor every resource call funnels through.

mod client;
mod request;
mod retry;

pub use client::HttpClient;
pub use request::RequestSpec;
pub use retry::{
    DEFAULT_BASE_DELAY, DEFAULT_JITTER_PCT, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_DELAY, RetryPolicy,
};
