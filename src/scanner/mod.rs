pub mod binary_detector;
pub mod file_list;

pub use binary_detector::{is_binary, is_binary_content, BinaryDetector};
pub use file_list::parse_file_list;
