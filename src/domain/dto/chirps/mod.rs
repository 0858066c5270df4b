pub mod request;
pub mod response;

pub use request::{CreateChirpRequest, ValidateChirpRequest};
pub use response::{ChirpResponse, ValidateChirpResponse};
