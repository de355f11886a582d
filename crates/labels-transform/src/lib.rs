pub mod compact;
pub mod country;
pub mod lines;
pub mod transform;

pub use compact::compact_lines;
pub use country::resolve_country;
pub use lines::build_address_lines;
pub use transform::transform_rows;
