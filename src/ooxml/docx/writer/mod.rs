//! DOCX writer: an in-memory document model serialized to WordprocessingML.
//!
//! The model covers what plain-text conversion needs: paragraphs of runs,
//! one section with page borders, a style table and package metadata.

pub mod doc;
pub mod paragraph;
pub mod props;
pub mod run;
pub mod section;
pub mod style;

pub use doc::MutableDocument;
pub use paragraph::{LineSpacing, MutableParagraph, ParagraphAlignment};
pub use props::DocumentProperties;
pub use run::MutableRun;
pub use section::{BorderSpec, PageBorders, SectionProperties};
pub use style::{MutableStyle, StyleType, generate_styles_xml};
