pub mod scanner;
pub mod walker;
pub mod filters;
pub mod top_k;

pub use scanner::find_biggest_files;
pub use walker::FileWalker;
pub use filters::*;
pub use top_k::*;
pub use bigfiles_domain::{FileRecord, ScanReport};
