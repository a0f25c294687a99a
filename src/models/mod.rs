//! Typed request and response shapes for the management API.
//!
//! Response structs keep unknown-tolerant defaults; create/update payloads
//! skip unset optional fields so partial updates stay partial on the wire.

mod account;
mod common;
mod dns;
mod event;
mod group;
mod network;
mod peer;
mod policy;
mod route;
mod setup_key;
mod token;
mod user;

pub use account::{Account, AccountSettings, AccountUpdate};
pub use common::{NetworkType, Protocol, SetupKeyType, UserRole, UserStatus};
pub use dns::{DnsSettings, Nameserver, NameserverGroup, NameserverGroupRequest};
pub use event::{AuditEvent, NetworkTrafficEvent};
pub use group::{Group, GroupCreate, GroupUpdate};
pub use network::{
    Network, NetworkCreate, NetworkResource, NetworkResourceRequest, NetworkRouter,
    NetworkRouterRequest, NetworkUpdate,
};
pub use peer::{Peer, PeerUpdate};
pub use policy::{Policy, PolicyCreate, PolicyRule, PolicyRuleCreate, PolicyRuleGroup};
pub use route::{Route, RouteCreate, RouteUpdate};
pub use setup_key::{SetupKey, SetupKeyCreate, SetupKeyUpdate};
pub use token::{Token, TokenCreate, TokenCreated};
pub use user::{User, UserCreate, UserUpdate};
