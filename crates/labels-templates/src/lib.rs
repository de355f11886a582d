pub mod parser;
pub mod paths;
pub mod store;

pub use parser::{RestrictedTemplateParser, TemplateParser, YamlTemplateParser};
pub use paths::{Paths, ensure_dir, load_paths};
pub use store::load_templates;
