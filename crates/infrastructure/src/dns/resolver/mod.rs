//! Iterative DNS resolution
//!
//! - **Engine**: the referral-following state machine ([`IterativeResolver`])
//! - **State**: per-resolution server set, hop count and visited servers
//! - **Referral**: nameserver names and glue from a delegation response
//! - **Extractor**: turns an authoritative answer into a caller-facing value
//!
//! ## Example Usage
//!
//! ```no_run
//! use ferrous_resolve_infrastructure::dns::resolver::{ResolverBuilder, ResolverSettings};
//! use ferrous_resolve_application::ports::DnsResolver;
//! use ferrous_resolve_domain::{DnsQuery, RecordType, ResolverConfig};
//!
//! # async fn run() -> Result<(), ferrous_resolve_domain::DomainError> {
//! let settings = ResolverSettings::from_config(&ResolverConfig::default())?;
//! let resolver = ResolverBuilder::new(settings).build();
//! let resolution = resolver
//!     .resolve(&DnsQuery::parse("example.com", RecordType::A)?)
//!     .await?;
//! println!("{}", resolution.value);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod engine;
pub mod extractor;
pub mod referral;
pub mod state;

pub use builder::ResolverBuilder;
pub use config::ResolverSettings;
pub use engine::IterativeResolver;
pub use extractor::{Extracted, RecordExtractor};
pub use state::ResolutionState;
