//! REST clients
//!
//! - **AlgodClient** - asset and application lookups against a node
//! - **IndexerClient** - application search and lookup against an indexer
//! - **models** - response bodies
//!
//! Both clients are thin async wrappers over `reqwest`; failures surface as
//! [`crate::errors::ClientError`] without any retry.

pub mod algod;
mod http;
pub mod indexer;
pub mod models;

pub use algod::AlgodClient;
pub use indexer::{IndexerClient, SearchForApplications};
pub use models::{Application, ApplicationResponse, ApplicationsResponse, Asset};
