pub mod maintenance;
pub mod notes;
pub mod security_tokens;
