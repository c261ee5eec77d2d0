//! UI building blocks: the force graph view plus the workspace widgets.

pub mod force_graph;

mod candidate_list;
mod chat;
mod execution_sheet;
mod exposure_form;
mod format;
mod positions_table;
mod sidebar;

pub use candidate_list::CandidateList;
pub use chat::Chat;
pub use execution_sheet::ExecutionSheet;
pub use exposure_form::ExposureForm;
pub use positions_table::PositionsTable;
pub use sidebar::{Sidebar, View};
