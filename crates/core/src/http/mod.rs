pub mod client;
pub mod endpoints;
pub mod traits;

// Transport implementations
pub mod reqwest_transport;

pub use client::ApiClient;
pub use reqwest_transport::ReqwestTransport;
pub use traits::{ApiRequest, ApiResponse, HttpTransport};
