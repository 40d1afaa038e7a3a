//! WordprocessingML (`.docx`) writing and read-back.

pub mod format;
pub(crate) mod markup;
pub mod reader;
pub mod writer;

pub use format::{BorderOffset, BorderStyle, LineSpacing, ParagraphAlignment};
pub use reader::DocxSummary;
pub use writer::MutableDocument;
