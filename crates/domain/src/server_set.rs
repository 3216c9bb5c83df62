use std::net::IpAddr;

/// Ordered, duplicate-free list of nameserver addresses to try for the next
/// query. Owned by a single in-flight resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerCandidateSet {
    servers: Vec<IpAddr>,
}

impl ServerCandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `addr` unless it is already present. Returns whether it was added.
    pub fn push(&mut self, addr: IpAddr) -> bool {
        if self.servers.contains(&addr) {
            return false;
        }
        self.servers.push(addr);
        true
    }

    pub fn retain(&mut self, keep: impl FnMut(&IpAddr) -> bool) {
        self.servers.retain(keep);
    }

    pub fn as_slice(&self) -> &[IpAddr] {
        &self.servers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IpAddr> {
        self.servers.iter()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

impl FromIterator<IpAddr> for ServerCandidateSet {
    fn from_iter<I: IntoIterator<Item = IpAddr>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<IpAddr> for ServerCandidateSet {
    fn extend<I: IntoIterator<Item = IpAddr>>(&mut self, iter: I) {
        for addr in iter {
            self.push(addr);
        }
    }
}

impl<'a> IntoIterator for &'a ServerCandidateSet {
    type Item = &'a IpAddr;
    type IntoIter = std::slice::Iter<'a, IpAddr>;

    fn into_iter(self) -> Self::IntoIter {
        self.servers.iter()
    }
}
