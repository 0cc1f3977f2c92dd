pub mod filter_sort_options;
pub mod task_card;

pub use filter_sort_options::FilterSortOptions;
pub use task_card::DashboardTaskCard;
