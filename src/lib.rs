//! Permission notation and realm-backed authorization.
//!
//! Permissions are written in a hierarchical notation such as
//! `blog:post:read,write` or `blog:*`. A granted permission *implies* a
//! requested one when every requested section is matched by the granted
//! section at the same position (see [`Permission::implies`]).
//!
//! An [`Authorizer`] asks its [`Realm`]s, in order, for the
//! [`AuthorizationInfo`] of an identity and answers permission and role
//! queries from the first realm that has any.

pub mod authorizer;
pub mod config;
pub mod error;
pub mod identity;
pub mod info;
pub mod matcher;
pub mod permission;
pub mod policy;
pub mod realm;
pub mod role;

pub use authorizer::{Authorizer, AuthorizerBuilder};
pub use config::AuthorizerConfig;
pub use error::{Error, Result};
pub use identity::{Identifier, Identity};
pub use info::AuthorizationInfo;
pub use permission::{Permission, Section};
pub use policy::{Policy, Requirement};
pub use realm::{Lookup, Realm, StaticRealm};
pub use role::Role;
