//! Pure derived state for the search page: filtering, pagination, and the
//! debounce primitive used for the search box.

pub mod debounce;
pub mod filter;
pub mod pagination;
pub mod search;

pub use debounce::Debouncer;
pub use filter::{filter_musicians, ActiveFilter, CapacityRange, FilterCriteria};
pub use pagination::{paginate, total_pages, Page};
pub use search::{option_from_value, FilterOptions, SearchView, SearchViewModel, GENRES};
