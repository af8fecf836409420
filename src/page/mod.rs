//! Page Interaction
//!
//! Self-contained behaviours of the marketing pages. Each one is a small
//! state machine with no shared data model; the frontend binds them to DOM
//! events and the dev server exposes the form validator.

pub mod catalog;
pub mod disclosure;
pub mod forms;
pub mod navbar;
pub mod reveal;
pub mod slider;
pub mod theme;
pub mod validation;

pub use catalog::{BillingPeriod, PricingPlan, PricingToggle, ProductCard, ProductFilter};
pub use disclosure::{Accordion, Tabs};
pub use forms::{SimpleForm, SimpleFormKind};
pub use navbar::{Navbar, SCROLL_THRESHOLD};
pub use reveal::{Rect, Viewport};
pub use slider::Slider;
pub use theme::Theme;
pub use validation::{validate_fields, FieldInput, FormErrors};
