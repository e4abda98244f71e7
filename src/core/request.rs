//! # Request Fencing
//!
//! Each request category carries a monotonically increasing token. A
//! response is applied only if its token is still the latest one issued for
//! its category; anything older is dropped on arrival.

/// The three independent request categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Countries,
    Teams,
    Roster,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestTokens {
    countries: u64,
    teams: u64,
    roster: u64,
}

impl RequestTokens {
    fn slot(&mut self, kind: RequestKind) -> &mut u64 {
        match kind {
            RequestKind::Countries => &mut self.countries,
            RequestKind::Teams => &mut self.teams,
            RequestKind::Roster => &mut self.roster,
        }
    }

    /// Issue a fresh token for `kind`, superseding any in-flight request.
    pub fn issue(&mut self, kind: RequestKind) -> u64 {
        let slot = self.slot(kind);
        *slot += 1;
        *slot
    }

    /// Supersede any in-flight request for `kind` without starting a new one.
    pub fn invalidate(&mut self, kind: RequestKind) {
        self.issue(kind);
    }

    pub fn is_current(&self, kind: RequestKind, token: u64) -> bool {
        let latest = match kind {
            RequestKind::Countries => self.countries,
            RequestKind::Teams => self.teams,
            RequestKind::Roster => self.roster,
        };
        latest == token
    }
}

/// Which categories currently have a request in flight.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadingFlags {
    pub countries: bool,
    pub teams: bool,
    pub roster: bool,
}

impl LoadingFlags {
    pub fn set(&mut self, kind: RequestKind, loading: bool) {
        match kind {
            RequestKind::Countries => self.countries = loading,
            RequestKind::Teams => self.teams = loading,
            RequestKind::Roster => self.roster = loading,
        }
    }

    pub fn any(&self) -> bool {
        self.countries || self.teams || self.roster
    }
}
