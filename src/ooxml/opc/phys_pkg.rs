//! Physical (ZIP) access to OPC packages.
//!
//! The writer produces the archive fully in memory so the finished bytes can be
//! handed straight to an outbound transfer. The reader is used to inspect
//! packages this crate produced.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Physical package writer for creating OPC packages.
///
/// Parts are written Deflate-compressed in the order they are added.
pub struct PhysPkgWriter {
    /// The underlying ZIP archive writer
    archive: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Write a part to the package with Deflate compression.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.write_with(pack_uri, blob, CompressionMethod::Deflated)
    }

    /// Write a part to the package without compression (stored).
    pub fn write_stored(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.write_with(pack_uri, blob, CompressionMethod::Stored)
    }

    fn write_with(
        &mut self,
        pack_uri: &PackURI,
        blob: &[u8],
        method: CompressionMethod,
    ) -> Result<()> {
        let options = SimpleFileOptions::default().compression_method(method);
        self.archive.start_file(pack_uri.membername(), options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the package bytes.
    ///
    /// Consumes the writer; the returned buffer starts at the archive's first byte.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Physical package reader over an in-memory archive.
pub struct PhysPkgReader<'data> {
    archive: ZipArchive<Cursor<&'data [u8]>>,
}

impl<'data> PhysPkgReader<'data> {
    /// Open a ZIP archive from a byte slice.
    pub fn new(data: &'data [u8]) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self { archive })
    }

    /// Get the decompressed content of a part.
    pub fn blob_for(&mut self, pack_uri: &PackURI) -> Result<Vec<u8>> {
        let mut file = self
            .archive
            .by_name(pack_uri.membername())
            .map_err(|_| OpcError::PartNotFound(pack_uri.to_string()))?;
        let mut blob = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut blob)?;
        Ok(blob)
    }

    /// Check if a specific member exists in the package.
    pub fn contains(&self, pack_uri: &PackURI) -> bool {
        self.archive
            .file_names()
            .any(|name| name == pack_uri.membername())
    }

    /// List all member names in archive order.
    pub fn member_names(&self) -> Vec<String> {
        self.archive.file_names().map(String::from).collect()
    }

    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut writer = PhysPkgWriter::new();
        let pack_uri = PackURI::new("/test.txt").unwrap();
        writer.write(&pack_uri, "سلام".as_bytes()).unwrap();
        let zip_data = writer.finish().unwrap();

        // Local file header signature
        assert_eq!(&zip_data[..4], b"PK\x03\x04");

        let mut reader = PhysPkgReader::new(&zip_data).unwrap();
        assert_eq!(reader.blob_for(&pack_uri).unwrap(), "سلام".as_bytes());
    }

    #[test]
    fn test_multiple_parts() {
        let mut writer = PhysPkgWriter::new();

        let content_types = PackURI::new("/[Content_Types].xml").unwrap();
        let rels = PackURI::new("/_rels/.rels").unwrap();
        let document = PackURI::new("/word/document.xml").unwrap();

        writer.write(&content_types, b"<Types/>").unwrap();
        writer.write_stored(&rels, b"<Relationships/>").unwrap();
        writer.write(&document, b"<document/>").unwrap();

        let zip_data = writer.finish().unwrap();
        let mut reader = PhysPkgReader::new(&zip_data).unwrap();

        assert_eq!(reader.len(), 3);
        assert!(reader.contains(&content_types));
        assert!(reader.contains(&rels));
        assert_eq!(reader.blob_for(&document).unwrap(), b"<document/>");
        assert_eq!(reader.member_names()[0], "[Content_Types].xml");
    }

    #[test]
    fn test_missing_part() {
        let zip_data = PhysPkgWriter::new().finish().unwrap();
        let mut reader = PhysPkgReader::new(&zip_data).unwrap();
        assert!(reader.is_empty());
        let missing = PackURI::new("/word/document.xml").unwrap();
        assert!(matches!(
            reader.blob_for(&missing),
            Err(OpcError::PartNotFound(_))
        ));
    }

    #[test]
    fn test_garbage_is_not_a_package() {
        assert!(PhysPkgReader::new(b"definitely not a zip").is_err());
    }
}
