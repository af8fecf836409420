//! Pages
//!
//! Route-level views. Each page owns its local signals and reads shared
//! state (alerts, theme, session) from [`GlobalState`](crate::state::GlobalState).

mod auth;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod register;

pub use dashboard::Dashboard;
pub use landing::Landing;
pub use login::Login;
pub use register::Register;
