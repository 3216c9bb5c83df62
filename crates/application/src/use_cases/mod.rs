pub mod dns;

pub use dns::{NameResolution, ResolveNamesUseCase, ResolvedName};
