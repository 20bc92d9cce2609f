//! Per-resource API surfaces.
//!
//! Each module wraps one resource family and is a pure mapping from
//! typed arguments to a path, query parameters, and body handed to
//! [`crate::JamaClient`]. None of them interpret HTTP status codes;
//! failures arrive as [`crate::JamaError`] from the core.

pub mod abstract_items;
pub mod activities;
pub mod attachments;
pub mod baselines;
pub mod filters;
pub mod item_types;
pub mod items;
pub mod pick_list_options;
pub mod pick_lists;
pub mod projects;
pub mod relationships;
pub mod releases;
pub mod tags;
pub mod test_cycles;
pub mod test_plans;
pub mod test_runs;
pub mod users;

pub use abstract_items::{AbstractItemsApi, AbstractItemsQuery};
pub use activities::{ActivitiesApi, ActivitiesQuery};
pub use attachments::AttachmentsApi;
pub use baselines::BaselinesApi;
pub use filters::FiltersApi;
pub use item_types::ItemTypesApi;
pub use items::{ItemParent, ItemsApi};
pub use pick_list_options::PickListOptionsApi;
pub use pick_lists::PickListsApi;
pub use projects::ProjectsApi;
pub use relationships::RelationshipsApi;
pub use releases::ReleasesApi;
pub use tags::TagsApi;
pub use test_cycles::TestCyclesApi;
pub use test_plans::TestPlansApi;
pub use test_runs::TestRunsApi;
pub use users::{NewUser, UserUpdate, UsersApi};

/// Shared empty-params slice for single-resource calls.
pub(crate) const NO_PARAMS: &[(String, String)] = &[];
