pub mod agents;
pub mod sessions;
pub mod workspace;
