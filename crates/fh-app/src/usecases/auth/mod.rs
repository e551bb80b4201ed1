//! Account use cases backed by the identity provider.

mod current_user;
mod register_account;
mod sign_in;
mod sign_out;

pub use current_user::CurrentUser;
pub use register_account::{RegisterAccount, RegisterError, RegistrationFormSession};
pub use sign_in::SignIn;
pub use sign_out::SignOut;
