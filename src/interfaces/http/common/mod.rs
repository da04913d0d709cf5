//! Building blocks shared by the HTTP modules

pub mod response;
pub mod validated_json;

pub use response::{ApiResponse, MessageResponse};
pub use validated_json::ValidatedJson;
