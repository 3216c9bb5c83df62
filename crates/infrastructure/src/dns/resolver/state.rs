use ferrous_resolve_domain::{DnsQuery, ServerCandidateSet, ServerFailureReason};
use std::collections::HashSet;
use std::net::IpAddr;
use std::sync::Arc;

/// Progress of one top-level (or nested) resolution.
///
/// Created per resolve call and dropped on return. `hops_taken` only grows,
/// and a `(server, name)` pair that has already answered is never queried
/// again within the same resolution.
#[derive(Debug)]
pub struct ResolutionState {
    pub query: DnsQuery,
    pub current_servers: ServerCandidateSet,
    pub hops_taken: u8,
    visited: HashSet<(IpAddr, Arc<str>)>,
    visited_name: Arc<str>,
}

impl ResolutionState {
    pub fn new(query: DnsQuery, root_servers: &[IpAddr]) -> Self {
        let visited_name: Arc<str> = Arc::from(query.domain.to_ascii_lowercase());
        Self {
            query,
            current_servers: root_servers.iter().copied().collect(),
            hops_taken: 0,
            visited: HashSet::new(),
            visited_name,
        }
    }

    /// Records that `server` answered a query for the target name.
    pub fn mark_visited(&mut self, server: IpAddr) {
        self.visited
            .insert((server, Arc::clone(&self.visited_name)));
    }

    pub fn is_visited(&self, server: &IpAddr) -> bool {
        self.visited
            .contains(&(*server, Arc::clone(&self.visited_name)))
    }

    /// Moves to the servers named by a referral.
    ///
    /// Servers that already answered for this name are dropped; if nothing
    /// new remains the referral points back into ground already covered.
    pub fn follow_referral(
        &mut self,
        mut next: ServerCandidateSet,
        max_hops: u8,
    ) -> Result<(), ServerFailureReason> {
        if next.is_empty() {
            return Err(ServerFailureReason::NoUsableNameservers);
        }

        next.retain(|server| !self.is_visited(server));
        if next.is_empty() {
            return Err(ServerFailureReason::DelegationLoop);
        }

        self.hops_taken = self.hops_taken.saturating_add(1);
        if self.hops_taken > max_hops {
            return Err(ServerFailureReason::HopLimitExceeded { max_hops });
        }

        self.current_servers = next;
        Ok(())
    }
}
