//! Users module - identity hand-off and backend user records.

mod users_model;

pub use users_model::{IdentityUser, SaveUserPayload, UserData, UserStatus};
