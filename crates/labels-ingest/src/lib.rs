pub mod headers;
pub mod reader;
pub mod writer;

pub use headers::{normalize_header, normalize_headers};
pub use reader::read_mailing_list;
pub use writer::write_labels;
