/// Presentation writer for PPTX.
use crate::common::unit::inches_to_emu;
use crate::config::{SLIDE_HEIGHT_IN, SLIDE_WIDTH_IN};
use crate::error::{DeckError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{PackageWriter, Part, Relationships};
use crate::ooxml::pptx::template;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::slide::MutableSlide;

/// Relative target of the single blank layout, as seen from `ppt/slides/`.
const LAYOUT_TARGET: &str = "../slideLayouts/slideLayout1.xml";

/// A mutable PowerPoint presentation for writing.
///
/// Slides are appended in order and never reordered; the whole package is
/// assembled in memory when saved.
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9_144_000,  // 10 inches
            slide_height: 6_858_000, // 7.5 inches
        }
    }

    /// Create a new empty 16:9 presentation, 13.333" x 7.5".
    pub fn widescreen() -> Self {
        let mut pres = Self::new();
        pres.set_slide_width(inches_to_emu(SLIDE_WIDTH_IN));
        pres.set_slide_height(inches_to_emu(SLIDE_HEIGHT_IN));
        pres
    }

    /// Add a new blank-layout slide to the presentation.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let slide_id = (self.slides.len() + 256) as u32;
        self.slides.push(MutableSlide::new(slide_id));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&MutableSlide> {
        self.slides.get(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Set the slide width in EMUs.
    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide height in EMUs.
    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
    }

    /// Generate presentation.xml content with actual relationship IDs.
    ///
    /// # Arguments
    /// * `master_rel_id` - Relationship ID of the slide master
    /// * `slide_rel_ids` - Relationship IDs of the slides, in slide order
    pub(crate) fn generate_presentation_xml(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        if slide_rel_ids.len() != self.slides.len() {
            return Err(DeckError::Xml(format!(
                "expected {} slide relationship IDs, got {}",
                self.slides.len(),
                slide_rel_ids.len()
            )));
        }

        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        // Write slide master ID list
        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="2147483648" r:id="{}"/>"#,
            master_rel_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        // Write slide ID list
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        // Write slide size
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;

        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Generate docProps/app.xml content.
    pub(crate) fn generate_app_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
        xml.push_str("<Application>Microsoft Office PowerPoint</Application>");
        xml.push_str("<PresentationFormat>Custom</PresentationFormat>");
        write!(xml, "<Slides>{}</Slides>", self.slides.len())?;
        xml.push_str("<Company>Aventra Consulting</Company>");
        xml.push_str("<AppVersion>12.0000</AppVersion>");
        xml.push_str("</Properties>");

        Ok(xml)
    }

    /// Assemble every part of the package.
    pub(crate) fn to_package(&self) -> Result<PackageWriter> {
        let mut package = PackageWriter::new();

        let pkg_rels = package.pkg_rels_mut();
        pkg_rels.add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
        pkg_rels.add(rt::CORE_PROPERTIES, "docProps/core.xml");
        pkg_rels.add(rt::EXTENDED_PROPERTIES, "docProps/app.xml");

        // Presentation part relationships: master first, then slides in order
        let mut pres_rels = Relationships::new();
        let master_rel_id = pres_rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        let slide_rel_ids: Vec<String> = (1..=self.slides.len())
            .map(|n| pres_rels.add(rt::SLIDE, &format!("slides/slide{}.xml", n)))
            .collect();
        pres_rels.add(rt::PRES_PROPS, "presProps.xml");
        pres_rels.add(rt::VIEW_PROPS, "viewProps.xml");
        pres_rels.add(rt::THEME, "theme/theme1.xml");
        pres_rels.add(rt::TABLE_STYLES, "tableStyles.xml");

        let presentation_xml = self.generate_presentation_xml(&master_rel_id, &slide_rel_ids)?;
        package.add_part(
            Part::new(
                "/ppt/presentation.xml",
                ct::PML_PRESENTATION_MAIN,
                presentation_xml.into_bytes(),
            )
            .with_rels(pres_rels),
        );

        for (index, slide) in self.slides.iter().enumerate() {
            let mut slide_rels = Relationships::new();
            slide_rels.add(rt::SLIDE_LAYOUT, LAYOUT_TARGET);
            package.add_part(
                Part::new(
                    format!("/ppt/slides/slide{}.xml", index + 1),
                    ct::PML_SLIDE,
                    slide.to_xml()?.into_bytes(),
                )
                .with_rels(slide_rels),
            );
        }

        let mut master_rels = Relationships::new();
        master_rels.add(rt::SLIDE_LAYOUT, LAYOUT_TARGET);
        master_rels.add(rt::THEME, "../theme/theme1.xml");
        package.add_part(
            Part::new(
                "/ppt/slideMasters/slideMaster1.xml",
                ct::PML_SLIDE_MASTER,
                template::default_slide_master_xml().as_bytes().to_vec(),
            )
            .with_rels(master_rels),
        );

        let mut layout_rels = Relationships::new();
        layout_rels.add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        package.add_part(
            Part::new(
                "/ppt/slideLayouts/slideLayout1.xml",
                ct::PML_SLIDE_LAYOUT,
                template::blank_slide_layout_xml().as_bytes().to_vec(),
            )
            .with_rels(layout_rels),
        );

        let static_parts = [
            ("/ppt/theme/theme1.xml", ct::OFC_THEME, template::default_theme_xml()),
            ("/ppt/presProps.xml", ct::PML_PRES_PROPS, template::default_pres_props_xml()),
            ("/ppt/viewProps.xml", ct::PML_VIEW_PROPS, template::default_view_props_xml()),
            ("/ppt/tableStyles.xml", ct::PML_TABLE_STYLES, template::default_table_styles_xml()),
            ("/docProps/core.xml", ct::OPC_CORE_PROPERTIES, template::default_core_props_xml()),
        ];
        for (partname, content_type, xml) in static_parts {
            package.add_part(Part::new(partname, content_type, xml.as_bytes().to_vec()));
        }

        package.add_part(Part::new(
            "/docProps/app.xml",
            ct::OFC_EXTENDED_PROPERTIES,
            self.generate_app_xml()?.into_bytes(),
        ));

        Ok(package)
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.to_package()?.to_bytes()
    }

    /// Save the presentation to a file.
    ///
    /// The package is fully serialized before the filesystem is touched. The
    /// bytes go to a sibling staging file that is renamed over `path`, so a
    /// failed save never leaves a truncated deck behind.
    ///
    /// The rename replaces the directory entry rather than rewriting the file:
    /// the directory must be writable even when `path` already exists, and an
    /// existing read-only `path` is refused up front instead of being replaced.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;

        if fs::metadata(path).is_ok_and(|metadata| metadata.permissions().readonly()) {
            return Err(DeckError::io(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "target is read-only"),
            ));
        }

        let staging = staging_path(path);

        if let Err(e) = fs::write(&staging, &bytes) {
            let _ = fs::remove_file(&staging);
            return Err(DeckError::io(path, e));
        }
        if let Err(e) = fs::rename(&staging, path) {
            let _ = fs::remove_file(&staging);
            return Err(DeckError::io(path, e));
        }

        log::info!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

/// `dir/.name.partial` next to the destination.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "presentation.pptx".to_string());
    path.with_file_name(format!(".{}.partial", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::format::AutoShapeType;

    #[test]
    fn test_create_presentation() {
        let pres = MutablePresentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 9_144_000);
        assert_eq!(pres.slide_height(), 6_858_000);
    }

    #[test]
    fn test_widescreen_dimensions() {
        let pres = MutablePresentation::widescreen();
        assert_eq!(pres.slide_width(), 12_191_695);
        assert_eq!(pres.slide_height(), 6_858_000);
    }

    #[test]
    fn test_add_slide() {
        let mut pres = MutablePresentation::new();
        pres.add_slide()
            .add_shape(AutoShapeType::Rectangle, 0, 0, 10, 10);
        pres.add_slide();

        assert_eq!(pres.slide_count(), 2);
        assert_eq!(pres.slide(0).map(MutableSlide::slide_id), Some(256));
        assert_eq!(pres.slide(1).map(MutableSlide::slide_id), Some(257));
        assert_eq!(pres.slides()[0].shape_count(), 1);
        assert!(pres.slide(2).is_none());
    }

    #[test]
    fn test_presentation_xml() {
        let mut pres = MutablePresentation::widescreen();
        pres.add_slide();
        pres.add_slide();

        let xml = pres
            .generate_presentation_xml("rId1", &["rId2".to_string(), "rId3".to_string()])
            .unwrap();
        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/><p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12191695" cy="6858000"/>"#));
    }

    #[test]
    fn test_presentation_xml_requires_all_rel_ids() {
        let mut pres = MutablePresentation::new();
        pres.add_slide();
        assert!(pres.generate_presentation_xml("rId1", &[]).is_err());
    }

    #[test]
    fn test_app_xml_counts_slides() {
        let mut pres = MutablePresentation::new();
        pres.add_slide();
        pres.add_slide();
        pres.add_slide();
        assert!(pres.generate_app_xml().unwrap().contains("<Slides>3</Slides>"));
    }

    #[test]
    fn test_package_parts() {
        let mut pres = MutablePresentation::widescreen();
        pres.add_slide();
        pres.add_slide();
        // presentation + 2 slides + master + layout + 5 static parts + app
        assert_eq!(pres.to_package().unwrap().part_count(), 11);
    }

    #[test]
    fn test_save_and_failed_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut pres = MutablePresentation::widescreen();
        pres.add_slide();

        let target = dir.path().join("deck.pptx");
        pres.save(&target).unwrap();
        assert!(target.exists());
        assert!(!dir.path().join(".deck.pptx.partial").exists());

        let missing = dir.path().join("missing").join("deck.pptx");
        let err = pres.save(&missing).unwrap_err();
        assert!(matches!(err, DeckError::Io { .. }));
        assert!(!missing.exists());
    }

    #[test]
    fn test_save_refuses_read_only_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("deck.pptx");
        fs::write(&target, b"keep me").unwrap();
        let mut permissions = fs::metadata(&target).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&target, permissions).unwrap();

        let mut pres = MutablePresentation::widescreen();
        pres.add_slide();
        let err = pres.save(&target).unwrap_err();

        assert!(matches!(
            err,
            DeckError::Io { ref source, .. } if source.kind() == io::ErrorKind::PermissionDenied
        ));
        assert_eq!(fs::read(&target).unwrap(), b"keep me");
        assert!(!dir.path().join(".deck.pptx.partial").exists());
    }

    #[test]
    fn test_save_replaces_writable_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("deck.pptx");
        fs::write(&target, b"old").unwrap();

        let mut pres = MutablePresentation::widescreen();
        pres.add_slide();
        pres.save(&target).unwrap();

        assert!(fs::read(&target).unwrap().starts_with(b"PK"));
    }

    #[test]
    fn test_staging_path() {
        assert_eq!(
            staging_path(Path::new("/app/Deck.pptx")),
            PathBuf::from("/app/.Deck.pptx.partial")
        );
    }
}
