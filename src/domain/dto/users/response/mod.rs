pub mod user_response;
pub mod oauth_response;

pub use oauth_response::{OAuthAuthorizationUrlResponse, OAuthLoginResponse};
pub use user_response::{LoginResponse, RegisterResponse, UserBasicInfo, UserResponse};
