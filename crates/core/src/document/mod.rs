pub mod defaults;
pub mod merge;
pub mod model;
pub mod validate;

pub use merge::{merge, render_document};
pub use model::{
    AboutSection, ContentDocument, HeroSection, SchemaError, ServiceItem, StatItem,
    StoredDocument,
};
pub use validate::{parse_editor_text, pretty_print, ValidationError};
