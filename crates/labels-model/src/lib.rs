pub mod error;
pub mod record;
pub mod row;
pub mod template;
pub mod text;

pub use error::{LabelsError, Result};
pub use record::{CountryResolution, LABEL_HEADER, LabelRecord};
pub use row::AddressRow;
pub use template::{
    AddressTemplate, DEFAULT_TEMPLATE_KEY, DEFAULT_UPPERCASE_LAST_N, TemplateSet,
};
pub use text::{canonicalize, collapse_whitespace};
