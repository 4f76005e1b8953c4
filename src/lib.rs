pub mod attribute;
pub mod cli;
pub mod navigator;
pub mod node;
pub mod output;
pub mod path;
pub mod query;

pub use attribute::{extract_attribute, lookup_attribute};
pub use navigator::{navigate, navigate_path};
pub use node::{ATTRIBUTE_PREFIX, Node, Selection, attribute_key, collapse_multiplicity};
pub use output::{to_json, to_json_pretty};
pub use path::Path;
pub use query::{Absence, QueryRequest, QueryResult, execute, resolve};
