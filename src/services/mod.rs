pub mod assignments;
pub mod auth;
pub mod submissions;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use submissions::SubmissionService;
