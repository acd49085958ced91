mod dashboard;
mod detail;
mod forms;
mod list;
mod service;

pub use dashboard::DASHBOARD_PAGE_SIZE;
pub use list::{CONTENT_PAGE_SIZE, ContentListQuery, HOME_LATEST_COUNT};
pub use service::ContentQueryService;
