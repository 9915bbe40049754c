//! Pages
//!
//! One component per route.

mod home;
mod login;
mod signup;
mod tasks;

pub use home::HomePage;
pub use login::LoginPage;
pub use signup::SignupPage;
pub use tasks::TasksPage;
