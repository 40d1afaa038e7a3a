//! XML text helpers shared by the writer and the inspector.

mod escape;

pub use escape::{escape_xml, strip_invalid_xml_chars, unescape_xml};
