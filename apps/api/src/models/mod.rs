pub mod candidate;
pub mod role;
pub mod stage;
pub mod user;
