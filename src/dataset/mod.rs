//! Dataset records and CSV persistence.

pub mod reader;
pub mod record;
pub mod writer;

pub use reader::{read_rows, DownloadRow};
pub use record::{MediaRecord, PostRecord, MEDIA_COLUMNS, POST_COLUMNS};
pub use writer::{write_media_csv, write_posts_csv};
