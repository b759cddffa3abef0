pub mod base;
pub mod duplicates;
pub mod entity;
pub mod iframe;
pub mod objects;
pub mod text;
pub mod url_params;

pub use crate::domain::model::{Mapping, NameRules};
pub use crate::domain::ports::{DocumentSink, FrameRegistry, WarningSink};
pub use crate::utils::error::Result;
pub use base::BaseHelpers;
pub use duplicates::{is_duplicate_array_input, is_duplicate_input};
pub use entity::is_valid_entity_name;
pub use iframe::{add_content_to_iframe, add_content_to_iframe_with_id, IframeRef};
pub use objects::{clone_object, is_empty};
pub use text::{neat_join, normalize_value, normalize_whitespace};
pub use url_params::get_url_params;
