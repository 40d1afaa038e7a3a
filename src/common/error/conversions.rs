//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

use super::types::Error;
use crate::ooxml::error::OoxmlError;
use crate::ooxml::opc::error::OpcError;

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        match err {
            OpcError::IoError(e) => Error::Io(e),
            OpcError::ZipError(e) => Error::ZipError(e.to_string()),
            OpcError::InvalidPackUri(s) => Error::Serialization(format!("invalid part name: {}", s)),
            OpcError::InvalidRelationship(s) => {
                Error::Serialization(format!("invalid relationship: {}", s))
            },
            OpcError::PartNotFound(s) => Error::Serialization(format!("part not found: {}", s)),
        }
    }
}

impl From<OoxmlError> for Error {
    fn from(err: OoxmlError) -> Self {
        match err {
            OoxmlError::Opc(e) => Error::from(e),
            OoxmlError::Io(e) => Error::Io(e),
            OoxmlError::Xml(s) => Error::XmlError(s),
            OoxmlError::InvalidFormat(s) => Error::Serialization(s),
        }
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::InputEncoding(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::InputEncoding(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidUpdate(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opc_errors_map_to_serialization() {
        let err: Error = OpcError::InvalidPackUri("word/document.xml".to_string()).into();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(err.is_build_failure());
    }

    #[test]
    fn test_ooxml_xml_error_maps_to_xml() {
        let err: Error = OoxmlError::Xml("unexpected end".to_string()).into();
        assert!(matches!(err, Error::XmlError(ref s) if s == "unexpected end"));
    }

    #[test]
    fn test_utf8_error_maps_to_input_encoding() {
        let bad = vec![0xffu8, 0xfe];
        let err: Error = String::from_utf8(bad).unwrap_err().into();
        assert!(matches!(err, Error::InputEncoding(_)));
    }

    #[test]
    fn test_json_error_maps_to_invalid_update() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, Error::InvalidUpdate(_)));
        assert!(!err.is_build_failure());
    }

    #[test]
    fn test_delivery_is_not_build_failure() {
        assert!(!Error::Delivery("timeout".to_string()).is_build_failure());
    }
}
