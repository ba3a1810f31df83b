pub mod equipment;
pub mod inspection;
pub mod issue;
pub mod profile;
