//! Page decision logic for the consultation quiz and booking flow.
//!
//! Each submodule is the pure logic behind one interactive page behavior:
//! quiz completion tracking, form validation state, booking date
//! restrictions, and password strength scoring. Every function takes its
//! inputs explicitly and holds no hidden global state, so the host page (or
//! a test) owns all wiring.

pub mod booking;
pub mod password;
pub mod progress;
pub mod validation;

pub use booking::{
    parse_booking_date, weekend_advisory, Advisory, BookingWindow, ConsultationSelection,
    ConsultationType,
};
pub use password::{PasswordPolicy, PasswordStrength, StrengthLevel};
pub use progress::{ProgressTier, QuizProgress};
pub use validation::{first_invalid, form_is_valid, FieldValidity, ValidationState};
