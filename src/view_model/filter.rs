use crate::api::Musician;

pub const CAPACITY_MIN: u32 = 0;
pub const CAPACITY_MAX: u32 = 10_000;

/// Inclusive venue capacity interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityRange {
    pub min: u32,
    pub max: u32,
}

impl Default for CapacityRange {
    fn default() -> Self {
        Self {
            min: CAPACITY_MIN,
            max: CAPACITY_MAX,
        }
    }
}

impl CapacityRange {
    /// Build a range, swapping the bounds if they arrive reversed
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn contains(&self, capacity: u32) -> bool {
        self.min <= capacity && capacity <= self.max
    }
}

/// Active-status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveFilter {
    #[default]
    Any,
    Active,
    Inactive,
}

impl ActiveFilter {
    /// Parse the select input value: "" / "true" / "false"
    pub fn from_value(value: &str) -> Self {
        match value {
            "true" => ActiveFilter::Active,
            "false" => ActiveFilter::Inactive,
            _ => ActiveFilter::Any,
        }
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            ActiveFilter::Any => "",
            ActiveFilter::Active => "true",
            ActiveFilter::Inactive => "false",
        }
    }

    pub fn matches(&self, active: bool) -> bool {
        match self {
            ActiveFilter::Any => true,
            ActiveFilter::Active => active,
            ActiveFilter::Inactive => !active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub search: String,
    pub genre: Option<String>,
    pub homebase: Option<String>,
    pub capacity: CapacityRange,
    pub agent: Option<String>,
    pub agency: Option<String>,
    pub active: ActiveFilter,
}

/// Unset and empty both mean "no constraint"
fn equals_if_set(filter: &Option<String>, value: &str) -> bool {
    match filter.as_deref() {
        None | Some("") => true,
        Some(wanted) => wanted == value,
    }
}

impl FilterCriteria {
    pub fn matches(&self, musician: &Musician) -> bool {
        self.matches_search(musician)
            && equals_if_set(&self.genre, &musician.genre)
            && equals_if_set(&self.homebase, &musician.homebase)
            && self.capacity.contains(musician.average_venue_capacity)
            && equals_if_set(&self.agent, &musician.agent)
            && equals_if_set(&self.agency, &musician.agency)
            && self.active.matches(musician.active)
    }

    fn matches_search(&self, musician: &Musician) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        musician.act_name.to_lowercase().contains(&needle)
            || musician.homebase.to_lowercase().contains(&needle)
    }
}

/// Musicians satisfying `criteria`, in their original order
pub fn filter_musicians(musicians: &[Musician], criteria: &FilterCriteria) -> Vec<Musician> {
    musicians
        .iter()
        .filter(|m| criteria.matches(m))
        .cloned()
        .collect()
}
