pub mod file_rewriter;
pub mod notice;
pub mod report;

pub use file_rewriter::{update_copyright_notice, FileRewriter, FileUpdate};
pub use notice::{validate_year, CopyrightNotice, NoticeChange, NoticeRewriter, Rewrite};
pub use report::{FileResult, FileStatus, ReportSummary, UpdateReport};
