pub mod admin_dashboard;
pub mod change_password;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod onboarding;
pub mod profile_completion;

pub use admin_dashboard::*;
pub use change_password::*;
pub use dashboard::*;
pub use home::*;
pub use login::*;
pub use onboarding::*;
pub use profile_completion::*;
