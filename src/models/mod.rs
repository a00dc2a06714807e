pub mod assignments;
pub mod auth;
pub mod common;
pub mod submissions;

pub use common::acknowledgement::{
    DeleteAcknowledgement, InsertAcknowledgement, UpdateAcknowledgement, UpdateOutcome,
};
pub use common::error_code::ErrorCode;
pub use common::response::{ApiResponse, SuccessResponse};
