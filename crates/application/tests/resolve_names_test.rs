use ferrous_resolve_application::ports::DnsResolution;
use ferrous_resolve_application::use_cases::ResolveNamesUseCase;
use ferrous_resolve_domain::{DomainError, RecordType, ResolvedValue, ServerFailureReason};
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

mod helpers;
use helpers::MockDnsResolver;

fn ipv4(a: u8, b: u8, c: u8, d: u8) -> DnsResolution {
    DnsResolution::new(ResolvedValue::Ipv4(Ipv4Addr::new(a, b, c, d)))
}

fn name_value(name: &str) -> DnsResolution {
    DnsResolution::new(ResolvedValue::Name(Arc::from(name)))
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Batch resolution
// ============================================================================

#[tokio::test]
async fn test_resolves_each_name_and_formats_lines() {
    let resolver = MockDnsResolver::new();
    resolver
        .set_response("www.example.com.", RecordType::A, Ok(ipv4(93, 184, 216, 34)))
        .await;

    let use_case = ResolveNamesUseCase::new(Arc::new(resolver.clone()));
    let results = use_case
        .execute(&names(&["www.example.com"]), RecordType::A)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert!(results[0].is_success());
    assert_eq!(results[0].to_string(), "www.example.com,93.184.216.34");

    let calls = resolver.calls().await;
    assert_eq!(&*calls[0].domain, "www.example.com.");
}

#[tokio::test]
async fn test_failures_are_reported_per_name() {
    let resolver = MockDnsResolver::new();
    resolver
        .set_response("good.example.", RecordType::A, Ok(ipv4(192, 0, 2, 1)))
        .await;
    resolver
        .set_response(
            "loop.example.",
            RecordType::A,
            Err(DomainError::server_failure(
                "loop.example.",
                ServerFailureReason::DelegationLoop,
            )),
        )
        .await;

    let use_case = ResolveNamesUseCase::new(Arc::new(resolver));
    let results = use_case
        .execute(
            &names(&["missing.example", "loop.example", "good.example"]),
            RecordType::A,
        )
        .await
        .unwrap();

    assert_eq!(results.len(), 3);
    assert!(matches!(
        results[0].outcome,
        Err(DomainError::NameError { .. })
    ));
    assert!(matches!(
        results[1].outcome,
        Err(DomainError::ServerFailure { .. })
    ));
    assert!(results[2].is_success());
    assert!(results[0].to_string().starts_with("missing.example,error: "));
    assert_ne!(results[0].to_string(), results[1].to_string());
}

#[tokio::test]
async fn test_output_order_follows_input_not_completion() {
    let resolver = MockDnsResolver::new();
    resolver
        .set_response("slow.example.", RecordType::A, Ok(ipv4(192, 0, 2, 1)))
        .await;
    resolver
        .set_response("fast.example.", RecordType::A, Ok(ipv4(192, 0, 2, 2)))
        .await;
    resolver
        .set_delay("slow.example.", Duration::from_millis(50))
        .await;

    let use_case = ResolveNamesUseCase::new(Arc::new(resolver));
    let results = use_case
        .execute(&names(&["slow.example", "fast.example"]), RecordType::A)
        .await
        .unwrap();

    assert_eq!(results[0].name, "slow.example");
    assert_eq!(results[1].name, "fast.example");
}

#[tokio::test]
async fn test_unsupported_type_fails_before_any_lookup() {
    let resolver = MockDnsResolver::new();
    let use_case = ResolveNamesUseCase::new(Arc::new(resolver.clone()));

    let result = use_case
        .execute(&names(&["example.com"]), RecordType::MX)
        .await;

    assert_eq!(result, Err(DomainError::UnsupportedType(RecordType::MX)));
    assert_eq!(resolver.call_count().await, 0);
}

#[tokio::test]
async fn test_invalid_name_is_a_per_name_error() {
    let resolver = MockDnsResolver::new();
    let use_case = ResolveNamesUseCase::new(Arc::new(resolver.clone()));

    let results = use_case
        .execute(&names(&["bad..name"]), RecordType::A)
        .await
        .unwrap();

    assert!(matches!(
        results[0].outcome,
        Err(DomainError::InvalidDomainName(_))
    ));
    assert_eq!(resolver.call_count().await, 0);
}

// ============================================================================
// Target address annotation
// ============================================================================

#[tokio::test]
async fn test_ns_answer_is_annotated_with_address() {
    let resolver = MockDnsResolver::new();
    resolver
        .set_response("example.com.", RecordType::NS, Ok(name_value("a.iana-servers.net.")))
        .await;
    resolver
        .set_response("a.iana-servers.net.", RecordType::A, Ok(ipv4(199, 43, 135, 53)))
        .await;

    let use_case =
        ResolveNamesUseCase::new(Arc::new(resolver.clone())).with_target_addresses(true);
    let results = use_case
        .execute(&names(&["example.com"]), RecordType::NS)
        .await
        .unwrap();

    assert_eq!(
        results[0].to_string(),
        "example.com,a.iana-servers.net., 199.43.135.53"
    );
    assert_eq!(resolver.call_count().await, 2);
}

#[tokio::test]
async fn test_failed_annotation_keeps_bare_name() {
    let resolver = MockDnsResolver::new();
    resolver
        .set_response("www.example.com.", RecordType::CNAME, Ok(name_value("gone.example.net.")))
        .await;

    let use_case = ResolveNamesUseCase::new(Arc::new(resolver)).with_target_addresses(true);
    let results = use_case
        .execute(&names(&["www.example.com"]), RecordType::CNAME)
        .await
        .unwrap();

    assert!(results[0].is_success());
    assert_eq!(results[0].to_string(), "www.example.com,gone.example.net.");
}

#[tokio::test]
async fn test_annotation_is_off_by_default() {
    let resolver = MockDnsResolver::new();
    resolver
        .set_response("example.com.", RecordType::NS, Ok(name_value("ns.example.com.")))
        .await;

    let use_case = ResolveNamesUseCase::new(Arc::new(resolver.clone()));
    use_case
        .execute(&names(&["example.com"]), RecordType::NS)
        .await
        .unwrap();

    assert_eq!(resolver.call_count().await, 1);
}
