pub mod traits;

// Store implementations
pub mod file;
pub mod memory;

pub use file::FileCredentialStore;
pub use memory::MemoryCredentialStore;
pub use traits::{CredentialStore, AUTH_TOKEN_KEY};
