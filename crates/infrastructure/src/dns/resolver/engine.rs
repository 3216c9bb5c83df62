use super::config::ResolverSettings;
use super::extractor::{Extracted, RecordExtractor};
use super::referral::{glue_addresses, nameserver_names};
use super::state::ResolutionState;
use crate::dns::codec::{MessageBuilder, ResponseParser};
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use ferrous_resolve_application::ports::{DnsResolution, DnsResolver};
use ferrous_resolve_domain::dns_record::names_equal;
use ferrous_resolve_domain::{
    DnsQuery, DomainError, Message, Question, RecordType, ResolvedValue, ResponseCode,
    ServerCandidateSet, ServerFailureReason,
};
use futures::future::{BoxFuture, FutureExt};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Iterative resolver: starts at the root servers and follows referrals
/// until an authoritative answer, a name error or a bounded failure.
///
/// Every call owns its [`ResolutionState`]; concurrent resolutions share only
/// the immutable settings and the transport.
pub struct IterativeResolver {
    transport: Arc<dyn DnsTransport>,
    settings: Arc<ResolverSettings>,
}

impl IterativeResolver {
    pub fn new(transport: Arc<dyn DnsTransport>, settings: ResolverSettings) -> Self {
        Self {
            transport,
            settings: Arc::new(settings),
        }
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// One resolution. `lineage` lists the names whose resolution is waiting
    /// on this one (glue-less nameservers and aliases), outermost first.
    fn resolve_nested<'a>(
        &'a self,
        query: DnsQuery,
        depth: u8,
        lineage: Vec<Arc<str>>,
    ) -> BoxFuture<'a, Result<DnsResolution, DomainError>> {
        async move {
            let mut state = ResolutionState::new(query, &self.settings.root_servers);
            let question = Question::new(Arc::clone(&state.query.domain), state.query.record_type);

            loop {
                let (message, server) = self.query_candidates(&state, &question).await?;
                state.mark_visited(server);

                if message.authoritative {
                    return self
                        .conclude(&state, &message, server, depth, &lineage)
                        .await;
                }

                if message.authorities.is_empty() {
                    debug!(
                        domain = %state.query.domain,
                        server = %server,
                        "No further delegation"
                    );
                    return Err(DomainError::NameError {
                        name: state.query.domain.to_string(),
                    });
                }

                let nameservers = nameserver_names(&message);
                if nameservers.is_empty() {
                    warn!(
                        domain = %state.query.domain,
                        server = %server,
                        authorities = message.authorities.len(),
                        "Referral names no nameservers"
                    );
                    return Err(DomainError::server_failure(
                        &*state.query.domain,
                        ServerFailureReason::NoUsableNameservers,
                    ));
                }

                let mut next = glue_addresses(&message, &nameservers);
                if next.is_empty() {
                    next = self
                        .resolve_nameservers(&state, &nameservers, depth, &lineage)
                        .await
                        .map_err(|reason| {
                            DomainError::server_failure(&*state.query.domain, reason)
                        })?;
                } else {
                    debug!(
                        domain = %state.query.domain,
                        glue = next.len(),
                        "Using glue addresses"
                    );
                }

                state
                    .follow_referral(next, self.settings.max_hops)
                    .map_err(|reason| {
                        DomainError::server_failure(&*state.query.domain, reason)
                    })?;

                debug!(
                    domain = %state.query.domain,
                    from = %server,
                    hops = state.hops_taken,
                    next = ?state.current_servers.as_slice(),
                    "Following referral"
                );
            }
        }
        .boxed()
    }

    /// Sends the question to the current candidates. A malformed reply or a
    /// server-error rcode disqualifies only the server that sent it; the
    /// remaining candidates after it are tried next.
    async fn query_candidates(
        &self,
        state: &ResolutionState,
        question: &Question,
    ) -> Result<(Message, IpAddr), DomainError> {
        let mut candidates = state.current_servers.as_slice();
        let mut last_error = String::from("no candidate servers");

        while !candidates.is_empty() {
            let (query, bytes) = MessageBuilder::build_query(question)?;

            let response = self
                .transport
                .send(candidates, &bytes, self.settings.query_timeout)
                .await
                .map_err(|e| {
                    if !e.is_server_fault() {
                        return e;
                    }
                    DomainError::server_failure(
                        &*state.query.domain,
                        ServerFailureReason::ServersExhausted {
                            last_error: e.to_string(),
                        },
                    )
                })?;

            let responder = response.server;
            match ResponseParser::parse_response(&response.bytes, &query) {
                Ok(message) if message.rcode.is_server_error() => {
                    warn!(
                        server = %responder,
                        domain = %question.name,
                        rcode = message.rcode.as_str(),
                        "Server refused to answer, trying next candidate"
                    );
                    last_error = format!("{} answered {}", responder, message.rcode.as_str());
                }
                Ok(message) => {
                    debug!(
                        server = %responder,
                        domain = %question.name,
                        authoritative = message.authoritative,
                        answers = message.answers.len(),
                        authorities = message.authorities.len(),
                        additionals = message.additionals.len(),
                        "Response received"
                    );
                    return Ok((message, responder));
                }
                Err(e) if e.is_server_fault() => {
                    warn!(
                        server = %responder,
                        domain = %question.name,
                        error = %e,
                        "Discarding unusable response, trying next candidate"
                    );
                    last_error = e.to_string();
                }
                Err(e) => return Err(e),
            }

            let skip = candidates
                .iter()
                .position(|addr| *addr == responder)
                .map_or(candidates.len(), |index| index + 1);
            candidates = &candidates[skip..];
        }

        Err(DomainError::server_failure(
            &*state.query.domain,
            ServerFailureReason::ServersExhausted { last_error },
        ))
    }

    async fn conclude(
        &self,
        state: &ResolutionState,
        message: &Message,
        server: IpAddr,
        depth: u8,
        lineage: &[Arc<str>],
    ) -> Result<DnsResolution, DomainError> {
        let query = &state.query;

        if message.rcode == ResponseCode::NXDomain {
            return Err(DomainError::NameError {
                name: query.domain.to_string(),
            });
        }

        match RecordExtractor::extract(&message.answers, &query.domain, query.record_type) {
            Some(Extracted::Value(value)) => {
                debug!(
                    domain = %query.domain,
                    server = %server,
                    hops = state.hops_taken,
                    "Authoritative answer"
                );
                Ok(DnsResolution::new(value).with_authority(server, state.hops_taken))
            }
            Some(Extracted::Alias(target)) => {
                let reason = if depth >= self.settings.max_nesting_depth {
                    Some(ServerFailureReason::NestingLimitExceeded {
                        max_depth: self.settings.max_nesting_depth,
                    })
                } else if is_pending(lineage, &query.domain, &target) {
                    Some(ServerFailureReason::DelegationLoop)
                } else {
                    None
                };
                if let Some(reason) = reason {
                    return Err(DomainError::server_failure(&*query.domain, reason));
                }

                debug!(domain = %query.domain, target = %target, "Following alias");
                let resolution = self
                    .resolve_nested(
                        DnsQuery::new(Arc::clone(&target), query.record_type),
                        depth + 1,
                        extend_lineage(lineage, &query.domain),
                    )
                    .await?;
                Ok(resolution.behind_alias(target))
            }
            None => Err(DomainError::NoData {
                name: query.domain.to_string(),
                record_type: query.record_type,
            }),
        }
    }

    /// Looks up the `A` record of every glue-less nameserver with a fresh
    /// resolution from the roots.
    async fn resolve_nameservers(
        &self,
        state: &ResolutionState,
        nameservers: &[Arc<str>],
        depth: u8,
        lineage: &[Arc<str>],
    ) -> Result<ServerCandidateSet, ServerFailureReason> {
        if depth >= self.settings.max_nesting_depth {
            return Err(ServerFailureReason::NestingLimitExceeded {
                max_depth: self.settings.max_nesting_depth,
            });
        }

        let child_lineage = extend_lineage(lineage, &state.query.domain);
        let mut addresses = ServerCandidateSet::new();
        let mut saw_loop = false;

        for nameserver in nameservers {
            if is_pending(lineage, &state.query.domain, nameserver) {
                debug!(
                    domain = %state.query.domain,
                    nameserver = %nameserver,
                    "Nameserver lookup already in progress, skipping"
                );
                saw_loop = true;
                continue;
            }

            debug!(
                domain = %state.query.domain,
                nameserver = %nameserver,
                depth = depth + 1,
                "Resolving nameserver without glue"
            );
            let lookup = DnsQuery::new(Arc::clone(nameserver), RecordType::A);
            match self
                .resolve_nested(lookup, depth + 1, child_lineage.clone())
                .await
            {
                Ok(resolution) => {
                    if let ResolvedValue::Ipv4(addr) = resolution.value {
                        addresses.push(IpAddr::V4(addr));
                    }
                }
                Err(e) => {
                    if matches!(
                        e,
                        DomainError::ServerFailure {
                            reason: ServerFailureReason::DelegationLoop,
                            ..
                        }
                    ) {
                        saw_loop = true;
                    }
                    warn!(
                        domain = %state.query.domain,
                        nameserver = %nameserver,
                        error = %e,
                        "Nameserver address lookup failed"
                    );
                }
            }
        }

        if addresses.is_empty() {
            return Err(if saw_loop {
                ServerFailureReason::DelegationLoop
            } else {
                ServerFailureReason::NoUsableNameservers
            });
        }
        Ok(addresses)
    }
}

/// Whether resolving `name` would wait on itself.
fn is_pending(lineage: &[Arc<str>], current: &str, name: &str) -> bool {
    names_equal(current, name) || lineage.iter().any(|pending| names_equal(pending, name))
}

fn extend_lineage(lineage: &[Arc<str>], name: &Arc<str>) -> Vec<Arc<str>> {
    let mut extended = Vec::with_capacity(lineage.len() + 1);
    extended.extend(lineage.iter().cloned());
    extended.push(Arc::clone(name));
    extended
}

#[async_trait]
impl DnsResolver for IterativeResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        RecordExtractor::ensure_supported(query.record_type)?;
        self.resolve_nested(query.clone(), 0, Vec::new()).await
    }
}
