use crate::api::Musician;
use crate::view_model::filter::{filter_musicians, ActiveFilter, CapacityRange, FilterCriteria};
use crate::view_model::pagination::{paginate, Page};

/// Genres offered by the genre select
pub const GENRES: [&str; 4] = ["Rock", "Jazz", "Pop", "Classical"];

/// Choices for the select inputs, derived from the loaded musicians
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterOptions {
    pub genres: Vec<String>,
    pub homebases: Vec<String>,
    pub agents: Vec<String>,
    pub agencies: Vec<String>,
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

impl FilterOptions {
    /// Distinct values in first-seen order
    pub fn from_musicians(musicians: &[Musician]) -> Self {
        let mut options = FilterOptions {
            genres: GENRES.iter().map(|g| g.to_string()).collect(),
            ..Default::default()
        };
        for musician in musicians {
            push_unique(&mut options.homebases, &musician.homebase);
            push_unique(&mut options.agents, &musician.agent);
            push_unique(&mut options.agencies, &musician.agency);
        }
        options
    }
}

/// What the search page renders
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub page: Page<Musician>,
    pub match_count: usize,
}

/// Search page state: criteria plus current page.
///
/// Any criteria edit sends the user back to page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchViewModel {
    criteria: FilterCriteria,
    page: usize,
    page_size: usize,
}

impl SearchViewModel {
    pub fn new(page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    fn edit(&mut self, change: impl FnOnce(&mut FilterCriteria)) {
        change(&mut self.criteria);
        self.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.edit(|c| c.search = search);
    }

    pub fn set_genre(&mut self, genre: Option<String>) {
        self.edit(|c| c.genre = genre);
    }

    pub fn set_homebase(&mut self, homebase: Option<String>) {
        self.edit(|c| c.homebase = homebase);
    }

    pub fn set_capacity(&mut self, capacity: CapacityRange) {
        self.edit(|c| c.capacity = capacity);
    }

    pub fn set_agent(&mut self, agent: Option<String>) {
        self.edit(|c| c.agent = agent);
    }

    pub fn set_agency(&mut self, agency: Option<String>) {
        self.edit(|c| c.agency = agency);
    }

    pub fn set_active(&mut self, active: ActiveFilter) {
        self.edit(|c| c.active = active);
    }

    pub fn reset_filters(&mut self) {
        self.edit(|c| *c = FilterCriteria::default());
    }

    pub fn view(&self, musicians: &[Musician]) -> SearchView {
        let matching = filter_musicians(musicians, &self.criteria);
        SearchView {
            match_count: matching.len(),
            page: paginate(&matching, self.page, self.page_size),
        }
    }
}

/// Select inputs use "" for "all"
pub fn option_from_value(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(count: u64) -> Vec<Musician> {
        (1..=count)
            .map(|id| Musician {
                id,
                act_name: format!("Act {}", id),
                genre: if id % 3 == 0 { "Rock" } else { "Jazz" }.to_string(),
                homebase: if id % 2 == 0 { "Austin" } else { "Chicago" }.to_string(),
                average_venue_capacity: (id as u32) * 100,
                agency: format!("Agency {}", id % 2),
                agent: if id <= 2 { "Sam Lee" } else { "Rae Kim" }.to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_every_criteria_edit_resets_page() {
        let edits: Vec<Box<dyn Fn(&mut SearchViewModel)>> = vec![
            Box::new(|vm| vm.set_search("act")),
            Box::new(|vm| vm.set_genre(Some("Jazz".to_string()))),
            Box::new(|vm| vm.set_homebase(Some("Austin".to_string()))),
            Box::new(|vm| vm.set_capacity(CapacityRange::new(0, 500))),
            Box::new(|vm| vm.set_agent(None)),
            Box::new(|vm| vm.set_agency(Some("Agency 1".to_string()))),
            Box::new(|vm| vm.set_active(ActiveFilter::Inactive)),
            Box::new(|vm| vm.reset_filters()),
        ];

        for edit in edits {
            let mut vm = SearchViewModel::new(12);
            vm.set_page(3);
            edit(&mut vm);
            assert_eq!(vm.page(), 1);
        }
    }

    #[test]
    fn test_view_pages_through_matches() {
        let musicians = roster(15);
        let mut vm = SearchViewModel::new(12);

        let view = vm.view(&musicians);
        assert_eq!(view.match_count, 15);
        assert_eq!(view.page.items.len(), 12);
        assert_eq!(view.page.total_pages, 2);

        vm.set_page(2);
        let view = vm.view(&musicians);
        assert_eq!(
            view.page.items.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![13, 14, 15]
        );
    }

    #[test]
    fn test_stale_page_clamps_when_matches_shrink() {
        let musicians = roster(30);
        let mut vm = SearchViewModel::new(12);
        vm.set_page(3);
        assert_eq!(vm.view(&musicians).page.page, 3);

        // Data refetch with fewer records while page 3 is still selected
        let view = vm.view(&musicians[..5]);
        assert_eq!(view.page.page, 1);
        assert_eq!(view.page.items.len(), 5);
    }

    #[test]
    fn test_filter_options_are_distinct_in_first_seen_order() {
        let options = FilterOptions::from_musicians(&roster(4));
        assert_eq!(options.homebases, vec!["Chicago", "Austin"]);
        assert_eq!(options.agencies, vec!["Agency 1", "Agency 0"]);
        assert_eq!(options.agents, vec!["Sam Lee", "Rae Kim"]);
        assert_eq!(options.genres.len(), GENRES.len());
    }

    #[test]
    fn test_agent_selection_narrows_results() {
        let musicians = roster(4);
        let options = FilterOptions::from_musicians(&musicians);
        let mut vm = SearchViewModel::new(12);

        vm.set_agent(options.agents.last().cloned());
        let view = vm.view(&musicians);
        assert_eq!(view.match_count, 2);
        assert!(view.page.items.iter().all(|m| m.agent == "Rae Kim"));
    }

    #[test]
    fn test_option_from_value() {
        assert_eq!(option_from_value(String::new()), None);
        assert_eq!(option_from_value("Pop".to_string()), Some("Pop".to_string()));
    }
}
