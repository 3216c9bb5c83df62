use ferrous_resolve_domain::DomainError;
use ring::rand::{SecureRandom, SystemRandom};
use std::sync::LazyLock;

static RNG: LazyLock<SystemRandom> = LazyLock::new(SystemRandom::new);

/// Unpredictable 16-bit query id drawn from the operating system CSPRNG.
pub fn random_transaction_id() -> Result<u16, DomainError> {
    let mut bytes = [0u8; 2];
    RNG.fill(&mut bytes)
        .map_err(|_| DomainError::IoError("system random source unavailable".to_string()))?;
    Ok(u16::from_be_bytes(bytes))
}
