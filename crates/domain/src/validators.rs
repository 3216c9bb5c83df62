use crate::DomainError;

pub const MAX_LABEL_LEN: usize = 63;
/// Presentation length limit for a fully qualified name, including the root dot.
pub const MAX_NAME_LEN: usize = 254;

/// Returns the name in fully-qualified, dot-terminated form.
///
/// The root name is `"."`. Empty labels (`"a..b"`), labels over 63 bytes and
/// names over 253 characters are rejected.
pub fn normalize_domain_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "domain name cannot be empty".to_string(),
        ));
    }
    if trimmed == "." {
        return Ok(".".to_string());
    }

    let fqdn = if trimmed.ends_with('.') {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    };

    if fqdn.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "{} exceeds {} characters",
            trimmed,
            MAX_NAME_LEN - 1
        )));
    }

    for label in fqdn.trim_end_matches('.').split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "{} contains an empty label",
                trimmed
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' exceeds {} bytes",
                label, MAX_LABEL_LEN
            )));
        }
    }

    Ok(fqdn)
}
