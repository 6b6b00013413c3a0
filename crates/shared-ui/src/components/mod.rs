// Building blocks
pub mod button;
pub mod card;
pub mod form;
pub mod form_field;
pub mod input;
pub mod textarea;

// Composed forms
pub mod appointment_form;

pub use appointment_form::*;
pub use button::*;
pub use card::*;
pub use form::*;
pub use form_field::*;
pub use input::*;
pub use textarea::*;
