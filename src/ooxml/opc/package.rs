/// In-memory OPC package.
///
/// Holds the package-level relationships and every part in insertion order.
/// The package is assembled once and handed to
/// [`PackageWriter`](crate::ooxml::opc::pkgwriter::PackageWriter).
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

#[derive(Debug, Clone)]
pub struct OpcPackage {
    rels: Relationships,
    parts: Vec<Part>,
}

impl OpcPackage {
    /// Create an empty package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI),
            parts: Vec::new(),
        }
    }

    /// Add a part. Part names must be unique within a package.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        if self.contains(part.partname()) {
            return Err(OpcError::InvalidPackUri(format!(
                "duplicate part name {}",
                part.partname()
            )));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Relate the package itself to a part that has already been added.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> Result<String> {
        if !self.contains(target) {
            return Err(OpcError::PartNotFound(target.to_string()));
        }
        self.rels.relate_to(target, reltype)
    }

    /// Relate one part to another. Both parts must already be in the package.
    pub fn relate_part(
        &mut self,
        source: &PackURI,
        target: &PackURI,
        reltype: &str,
    ) -> Result<String> {
        if !self.contains(target) {
            return Err(OpcError::PartNotFound(target.to_string()));
        }
        let part = self
            .parts
            .iter_mut()
            .find(|p| p.partname() == source)
            .ok_or_else(|| OpcError::PartNotFound(source.to_string()))?;
        part.rels_mut().relate_to(target, reltype)
    }

    pub fn get_part(&self, partname: &PackURI) -> Result<&Part> {
        self.parts
            .iter()
            .find(|p| p.partname() == partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    #[inline]
    pub fn contains(&self, partname: &PackURI) -> bool {
        self.parts.iter().any(|p| p.partname() == partname)
    }

    /// Package-level relationships (`/_rels/.rels`).
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}
