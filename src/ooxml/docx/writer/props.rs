//! Package metadata: `docProps/core.xml` and `docProps/app.xml`.

use crate::common::xml::escape_xml;
use chrono::{DateTime, SecondsFormat, Utc};

/// Document core properties.
#[derive(Debug, Clone, Default)]
pub struct DocumentProperties {
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

impl DocumentProperties {
    /// Properties stamped with the current time.
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            created: Some(now),
            modified: Some(now),
            ..Self::default()
        }
    }

    /// Generate core.xml content for this properties set.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(768);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        let dates = [("dcterms:created", &self.created), ("dcterms:modified", &self.modified)];
        for (tag, value) in dates {
            if let Some(value) = value {
                xml.push_str(&format!(
                    r#"<{tag} xsi:type="dcterms:W3CDTF">{}</{tag}>"#,
                    value.to_rfc3339_opts(SecondsFormat::Secs, true)
                ));
            }
        }

        xml.push_str("</cp:coreProperties>");
        xml
    }
}

/// Generate app.xml content naming the producing application.
pub fn app_properties_xml(application: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes"><Application>{}</Application><DocSecurity>0</DocSecurity></Properties>"#,
        escape_xml(application)
    )
}
