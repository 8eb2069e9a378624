mod input;
mod pack_list;
mod results_table;
mod status_bar;

pub use input::TextInput;
pub use pack_list::{PackList, PackListState};
pub use results_table::ResultsTable;
pub use status_bar::StatusBar;
