//! Per-resource API handles.
//!
//! Each handle binds a resource's paths and payload shapes to the shared
//! executor; all retry and error handling lives in the pipeline, never here.

mod accounts;
mod dns;
mod events;
mod groups;
mod networks;
mod peers;
mod policies;
mod routes;
mod setup_keys;
mod tokens;
mod users;

pub use accounts::Accounts;
pub use dns::Dns;
pub use events::Events;
pub use groups::Groups;
pub use networks::Networks;
pub use peers::Peers;
pub use policies::Policies;
pub use routes::Routes;
pub use setup_keys::SetupKeys;
pub use tokens::Tokens;
pub use users::Users;
