//! Domain layer: core entities and business rules.

pub mod clock;
pub mod contact;
pub mod contact_list_state;
pub mod events;
pub mod input_state;
pub mod login_form_state;
pub mod message;
pub mod seed;
pub mod session;
pub mod shell_state;
pub mod user;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
