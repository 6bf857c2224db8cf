use std::io::Write;

use crate::{low_level::LowLevelGdtf, SerializationError};

/// Name of the only entry in a `.gdtf` package.
pub const DESCRIPTION_FILE: &str = "description.xml";

const XML_HEADER: &str = concat!(r#"<?xml version="1.0" encoding="UTF-8"?>"#, "\n");

impl LowLevelGdtf {
    /// Serialize to a complete `.gdtf` package.
    pub fn serialize(&self) -> Result<Vec<u8>, SerializationError> {
        package_description(&self.serialize_description()?)
    }

    /// Serialize to the text of `description.xml`, indented by two spaces.
    pub fn serialize_description(&self) -> Result<String, SerializationError> {
        let mut description: String = XML_HEADER.into();
        let mut serializer = quick_xml::se::Serializer::new(&mut description);
        serializer.indent(' ', 2);
        serde::Serialize::serialize(self, serializer)?;
        Ok(description)
    }
}

/// Wrap a fixture description into a `.gdtf` package.
///
/// The package is a zip archive holding `description.xml` and nothing else.
/// The entry is stored without compression, consoles refuse deflated
/// descriptions.
pub fn package_description(description: &str) -> Result<Vec<u8>, SerializationError> {
    let mut out = Vec::<u8>::new();
    let buf = std::io::Cursor::new(&mut out);
    {
        let mut zip = zip::ZipWriter::new(buf);

        let options =
            zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Stored);
        zip.start_file(DESCRIPTION_FILE, options)?;
        zip.write_all(description.as_bytes())?;

        // Dropping the `ZipWriter` will have the same effect, but may silently fail
        zip.finish()?;
    }

    Ok(out)
}
