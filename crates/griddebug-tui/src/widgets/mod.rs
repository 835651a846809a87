//! Widget components for the TUI

mod case_list;
mod header;
mod report;
mod status_bar;

pub use case_list::CaseList;
pub use header::MainHeader;
pub use report::ReportView;
pub use status_bar::StatusBar;
