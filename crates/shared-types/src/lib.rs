pub mod config;
pub mod error;
pub mod messages;
pub mod session;
pub mod view_state;

// PPE domain modules
pub mod equipment;
pub mod inspection;
pub mod issue;
pub mod profile;
pub mod requests;
pub mod role;

pub use config::*;
pub use error::*;
pub use session::*;
pub use view_state::*;

pub use equipment::*;
pub use inspection::*;
pub use issue::*;
pub use profile::*;
pub use requests::*;
pub use role::*;
