// Standalone components
pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod form;
pub mod form_select;
pub mod input;
pub mod label;
pub mod page_header;
pub mod skeleton;
pub mod textarea;

// Layout
pub mod sidebar;

pub use alert::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use page_header::*;
pub use sidebar::*;
pub use skeleton::*;
pub use textarea::*;
