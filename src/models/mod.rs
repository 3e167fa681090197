/// Data types for the authentication workflow
///
/// # Models
///
/// - `account`: User accounts keyed by email, storing a one-way
///   password hash and a credential-free public projection
/// - `ticket`: Short-lived password-reset tickets linking an email to a
///   one-time code

pub mod account;
pub mod ticket;

pub use account::{Account, CreateAccount, PublicAccount};
pub use ticket::{CreateResetTicket, ResetTicket};
