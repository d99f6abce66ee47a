use std::fmt;

use crate::models::{Athlete, EventGroup};

/// Active roster filter: everyone, or a single training group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupFilter {
    #[default]
    All,
    Group(EventGroup),
}

impl GroupFilter {
    pub fn matches(&self, athlete: &Athlete) -> bool {
        match self {
            GroupFilter::All => true,
            GroupFilter::Group(group) => athlete.group == *group,
        }
    }

    /// Filter bar order: All, then each group
    pub fn bar() -> Vec<GroupFilter> {
        let mut filters = vec![GroupFilter::All];
        filters.extend(EventGroup::ALL.iter().copied().map(GroupFilter::Group));
        filters
    }

    pub fn next(&self) -> GroupFilter {
        let bar = Self::bar();
        let idx = bar.iter().position(|f| f == self).unwrap_or(0);
        bar[(idx + 1) % bar.len()]
    }

    pub fn prev(&self) -> GroupFilter {
        let bar = Self::bar();
        let idx = bar.iter().position(|f| f == self).unwrap_or(0);
        bar[(idx + bar.len() - 1) % bar.len()]
    }
}

impl fmt::Display for GroupFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupFilter::All => write!(f, "All"),
            GroupFilter::Group(group) => write!(f, "{group}"),
        }
    }
}

/// Owns the athlete list and the active filter.
///
/// The roster is seeded once at startup; filtering never mutates it.
#[derive(Debug)]
pub struct RosterStore {
    athletes: Vec<Athlete>,
    filter: GroupFilter,
}

impl RosterStore {
    pub fn new(athletes: Vec<Athlete>) -> Self {
        Self {
            athletes,
            filter: GroupFilter::All,
        }
    }

    pub fn athletes(&self) -> &[Athlete] {
        &self.athletes
    }

    pub fn filter(&self) -> GroupFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: GroupFilter) {
        self.filter = filter;
    }

    /// Ordered sub-sequence of the roster matching the active filter
    pub fn filtered(&self) -> Vec<&Athlete> {
        self.athletes
            .iter()
            .filter(|a| self.filter.matches(a))
            .collect()
    }
}
