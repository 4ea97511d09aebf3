// Job listings: role catalogue, pluggable job sources and post-fetch filtering.

pub mod filter;
pub mod mock_board;
pub mod models;
pub mod source;

pub use filter::JobFilter;
pub use mock_board::MockJobBoard;
pub use models::{JobPosting, JobQuery, Role};
pub use source::JobSource;
