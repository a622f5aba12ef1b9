//! Package writer for OPC packages.
//!
//! This module serializes a set of parts into the ZIP container, including the
//! [Content_Types].xml item and every `.rels` part.

use crate::error::{DeckError, Result};
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::rel::Relationships;
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

const CONTENT_TYPES_MEMBER: &str = "[Content_Types].xml";
const PACKAGE_RELS_MEMBER: &str = "_rels/.rels";

/// A part queued for writing.
#[derive(Debug)]
pub struct Part {
    /// Absolute partname, e.g. `/ppt/slides/slide1.xml`
    partname: String,
    content_type: &'static str,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    pub fn new(partname: impl Into<String>, content_type: &'static str, blob: Vec<u8>) -> Self {
        Self {
            partname: partname.into(),
            content_type,
            blob,
            rels: Relationships::new(),
        }
    }

    /// Builder method: attach the part's relationships.
    pub fn with_rels(mut self, rels: Relationships) -> Self {
        self.rels = rels;
        self
    }

    pub fn partname(&self) -> &str {
        &self.partname
    }

    /// ZIP member name (partname without the leading slash).
    fn membername(&self) -> &str {
        self.partname.trim_start_matches('/')
    }

    /// ZIP member name of the part's relationships item.
    fn rels_membername(&self) -> String {
        let member = self.membername();
        match member.rsplit_once('/') {
            Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
            None => format!("_rels/{}.rels", member),
        }
    }

    fn ext(&self) -> &str {
        self.partname.rsplit_once('.').map_or("", |(_, ext)| ext)
    }
}

/// Package writer that serializes parts to a ZIP archive in memory.
///
/// Members are written in a fixed order: content types, package relationships,
/// then each part followed by its relationships.
#[derive(Debug, Default)]
pub struct PackageWriter {
    pkg_rels: Relationships,
    parts: Vec<Part>,
}

impl PackageWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Package-level relationships (`_rels/.rels`).
    pub fn pkg_rels_mut(&mut self) -> &mut Relationships {
        &mut self.pkg_rels
    }

    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    #[cfg(test)]
    pub(crate) fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Serialize the package to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut phys_writer = PhysPkgWriter::new();

        let cti = ContentTypesItem::from_parts(&self.parts);
        phys_writer.write(CONTENT_TYPES_MEMBER, cti.to_xml().as_bytes())?;
        phys_writer.write(PACKAGE_RELS_MEMBER, self.pkg_rels.to_xml().as_bytes())?;

        for part in &self.parts {
            phys_writer.write(part.membername(), &part.blob)?;
            if !part.rels.is_empty() {
                phys_writer.write(&part.rels_membername(), part.rels.to_xml().as_bytes())?;
            }
        }

        phys_writer.finish()
    }
}

/// Helper for building [Content_Types].xml content.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, &'static str>,

    /// Override content types by partname
    overrides: BTreeMap<String, &'static str>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS);
        defaults.insert("xml".to_string(), ct::XML);

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_parts(parts: &[Part]) -> Self {
        let mut cti = Self::new();
        for part in parts {
            cti.add_content_type(part);
        }
        cti
    }

    fn add_content_type(&mut self, part: &Part) {
        if self.defaults.get(part.ext()) == Some(&part.content_type) {
            return;
        }
        self.overrides
            .insert(part.partname().to_string(), part.content_type);
    }

    /// Generate the XML for [Content_Types].xml.
    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES));

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                ext, content_type
            ));
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                partname, content_type
            ));
        }

        xml.push_str("</Types>");

        xml
    }
}

/// Physical package writer: the ZIP container itself.
///
/// Every member is deflated and stamped with the DOS epoch so identical
/// packages serialize to identical bytes.
struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl PhysPkgWriter {
    fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .last_modified_time(DateTime::default()),
        }
    }

    fn write(&mut self, membername: &str, blob: &[u8]) -> Result<()> {
        self.archive.start_file(membername, self.options)?;
        self.archive
            .write_all(blob)
            .map_err(|e| DeckError::Zip(e.to_string()))
    }

    fn finish(self) -> Result<Vec<u8>> {
        Ok(self.archive.finish()?.into_inner())
    }
}
