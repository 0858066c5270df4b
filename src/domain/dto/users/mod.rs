pub mod request;
pub mod response;

pub use request::{CreateUserRequest, LoginRequest, UpdateUserRequest};
pub use response::{LoginResponse, UserResponse};
