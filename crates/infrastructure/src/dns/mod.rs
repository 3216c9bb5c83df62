pub mod codec;
pub mod resolver;
pub mod transport;

pub use resolver::{IterativeResolver, ResolverBuilder, ResolverSettings};
