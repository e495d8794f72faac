pub mod actions;
pub mod api;
pub mod error;
pub mod memory;
pub mod session;
pub mod stub;
pub mod token;

pub use api::{
    AdminApi, AuthApi, AuthResponse, Backend, BriefApi, Credentials, NotificationApi, ProfileApi,
    ResponseApi, SignupRequest, UserApi, UserQuery,
};
pub use error::ClientError;
pub use memory::{InMemoryBackend, SentNotification};
pub use session::Session;
pub use stub::{StubBackend, STUB_TOKEN, STUB_USER_ID};
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore, AUTH_TOKEN_KEY};
