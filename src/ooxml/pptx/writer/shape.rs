/// Shape types and implementation for PPTX presentations.
use crate::common::RGBColor;
use crate::error::Result;
use std::fmt::Write as FmtWrite;

// Import shared format types
pub use super::super::format::{AutoShapeType, Fill, LineFormat};
use super::text::TextFrame;

/// What a shape is drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// A preset geometry shape (rectangle, rounded rectangle, oval)
    AutoShape(AutoShapeType),
    /// A borderless, unfilled text container
    TextBox,
}

/// A shape on a slide.
///
/// Geometry is stored in EMUs. Every shape owns a text frame; autoshapes
/// simply leave it empty.
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    pub(crate) kind: ShapeKind,
    pub(crate) x: i64,
    pub(crate) y: i64,
    pub(crate) width: i64,
    pub(crate) height: i64,
    pub(crate) fill: Fill,
    pub(crate) line: LineFormat,
    pub(crate) text_frame: TextFrame,
}

impl MutableShape {
    /// Create a new preset geometry shape.
    pub(crate) fn new_auto_shape(
        shape_id: u32,
        shape_type: AutoShapeType,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> Self {
        Self {
            shape_id,
            kind: ShapeKind::AutoShape(shape_type),
            x,
            y,
            width,
            height,
            fill: Fill::Inherit,
            line: LineFormat::Inherit,
            text_frame: TextFrame::new(),
        }
    }

    /// Create a new text box shape.
    pub(crate) fn new_text_box(shape_id: u32, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            shape_id,
            kind: ShapeKind::TextBox,
            x,
            y,
            width,
            height,
            fill: Fill::None,
            line: LineFormat::Inherit,
            text_frame: TextFrame::new(),
        }
    }

    /// Builder method: solid fill.
    pub fn fill(&mut self, color: RGBColor) -> &mut Self {
        self.fill = Fill::Solid(color);
        self
    }

    /// Builder method: solid outline.
    pub fn line(&mut self, color: RGBColor) -> &mut Self {
        self.line = LineFormat::Solid(color);
        self
    }

    /// Builder method: remove the outline.
    pub fn no_line(&mut self) -> &mut Self {
        self.line = LineFormat::None;
        self
    }

    /// Get the text frame for adding paragraphs.
    pub fn text_frame_mut(&mut self) -> &mut TextFrame {
        &mut self.text_frame
    }

    pub fn text_frame(&self) -> &TextFrame {
        &self.text_frame
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Shape name as PowerPoint shows it in the selection pane.
    pub fn name(&self) -> String {
        let base = match self.kind {
            ShapeKind::AutoShape(shape_type) => shape_type.base_name(),
            ShapeKind::TextBox => "TextBox",
        };
        format!("{} {}", base, self.shape_id - 1)
    }

    /// Offset `(x, y)` in EMUs.
    pub fn position(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    /// Extent `(width, height)` in EMUs.
    pub fn size(&self) -> (i64, i64) {
        (self.width, self.height)
    }

    pub fn fill_format(&self) -> Fill {
        self.fill
    }

    pub fn line_format(&self) -> LineFormat {
        self.line
    }

    /// Whether the shape lies entirely inside a canvas of the given size.
    pub fn fits_within(&self, canvas_width: i64, canvas_height: i64) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x + self.width <= canvas_width
            && self.y + self.height <= canvas_height
    }

    /// Generate the `<p:sp>` XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            self.name()
        )?;
        match self.kind {
            ShapeKind::TextBox => xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#),
            ShapeKind::AutoShape(_) => xml.push_str("<p:cNvSpPr/>"),
        }
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        xml.push_str("<a:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, self.x, self.y)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, self.width, self.height)?;
        xml.push_str("</a:xfrm>");
        let preset = match self.kind {
            ShapeKind::AutoShape(shape_type) => shape_type.preset(),
            ShapeKind::TextBox => "rect",
        };
        write!(xml, r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#, preset)?;
        self.write_fill(xml)?;
        self.write_line(xml)?;
        xml.push_str("</p:spPr>");

        if let ShapeKind::AutoShape(_) = self.kind {
            // Theme references used by PowerPoint's default shape style
            xml.push_str("<p:style>");
            xml.push_str(r#"<a:lnRef idx="1"><a:schemeClr val="accent1"/></a:lnRef>"#);
            xml.push_str(r#"<a:fillRef idx="3"><a:schemeClr val="accent1"/></a:fillRef>"#);
            xml.push_str(r#"<a:effectRef idx="2"><a:schemeClr val="accent1"/></a:effectRef>"#);
            xml.push_str(r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef>"#);
            xml.push_str("</p:style>");
        }

        xml.push_str("<p:txBody>");
        self.write_body_properties(xml);
        self.text_frame.write_paragraphs(xml)?;
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");

        Ok(())
    }

    fn write_fill(&self, xml: &mut String) -> Result<()> {
        match self.fill {
            Fill::Inherit => {},
            Fill::None => xml.push_str("<a:noFill/>"),
            Fill::Solid(color) => {
                write!(
                    xml,
                    r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                    color.to_hex()
                )?;
            },
        }
        Ok(())
    }

    fn write_line(&self, xml: &mut String) -> Result<()> {
        match self.line {
            LineFormat::Inherit => {},
            LineFormat::None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
            LineFormat::Solid(color) => {
                write!(
                    xml,
                    r#"<a:ln><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                    color.to_hex()
                )?;
            },
        }
        Ok(())
    }

    /// Text boxes grow to fit their text and only wrap when asked to;
    /// autoshapes wrap inside their bounds with text centered vertically.
    fn write_body_properties(&self, xml: &mut String) {
        let wrap = match (self.kind, self.text_frame.is_word_wrapped()) {
            (_, Some(true)) => Some("square"),
            (_, Some(false)) | (ShapeKind::TextBox, None) => Some("none"),
            (ShapeKind::AutoShape(_), None) => None,
        };

        xml.push_str("<a:bodyPr");
        if let Some(wrap) = wrap {
            xml.push_str(r#" wrap=""#);
            xml.push_str(wrap);
            xml.push('"');
        }
        xml.push_str(r#" rtlCol="0""#);
        match self.kind {
            ShapeKind::TextBox => xml.push_str("><a:spAutoFit/></a:bodyPr>"),
            ShapeKind::AutoShape(_) => xml.push_str(r#" anchor="ctr"/>"#),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::format::Alignment;

    fn shape_xml(shape: &MutableShape) -> String {
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_rounded_rectangle_xml() {
        let mut shape =
            MutableShape::new_auto_shape(3, AutoShapeType::RoundedRectangle, 10, 20, 30, 40);
        shape.fill(RGBColor::new(0, 102, 153)).no_line();

        let xml = shape_xml(&shape);
        assert!(xml.contains(r#"<p:cNvPr id="3" name="Rounded Rectangle 2"/>"#));
        assert!(xml.contains(r#"<a:off x="10" y="20"/><a:ext cx="30" cy="40"/>"#));
        assert!(xml.contains(r#"<a:prstGeom prst="roundRect">"#));
        assert!(xml.contains(
            r#"<a:solidFill><a:srgbClr val="006699"/></a:solidFill><a:ln><a:noFill/></a:ln></p:spPr>"#
        ));
        assert!(xml.contains("<p:style>"));
        assert!(xml.contains(r#"<a:bodyPr rtlCol="0" anchor="ctr"/><a:lstStyle/><a:p/>"#));
    }

    #[test]
    fn test_oval_with_outline() {
        let mut shape = MutableShape::new_auto_shape(2, AutoShapeType::Oval, 0, 0, 100, 100);
        shape.line(RGBColor::new(0, 51, 102));

        let xml = shape_xml(&shape);
        assert!(xml.contains(r#"name="Oval 1""#));
        assert!(xml.contains(r#"<a:prstGeom prst="ellipse">"#));
        assert!(xml.contains(r#"<a:ln><a:solidFill><a:srgbClr val="003366"/></a:solidFill></a:ln>"#));
        assert!(!xml.contains("<a:solidFill><a:srgbClr val=\"003366\"/></a:solidFill><a:ln>"));
    }

    #[test]
    fn test_text_box_wrapping() {
        let mut shape = MutableShape::new_text_box(4, 0, 0, 100, 50);
        shape
            .text_frame_mut()
            .add_paragraph("Hello")
            .align(Alignment::Center);

        let xml = shape_xml(&shape);
        assert!(xml.contains(r#"name="TextBox 3""#));
        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains("<a:noFill/>"));
        assert!(xml.contains(r#"<a:bodyPr wrap="none" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#));
        assert!(!xml.contains("<p:style>"));

        shape.text_frame_mut().word_wrap(true);
        let xml = shape_xml(&shape);
        assert!(xml.contains(r#"<a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#));
    }

    #[test]
    fn test_fits_within() {
        let shape = MutableShape::new_text_box(2, 100, 100, 800, 400);
        assert!(shape.fits_within(900, 500));
        assert!(!shape.fits_within(899, 500));
        assert!(!shape.fits_within(900, 499));

        let negative = MutableShape::new_text_box(2, -1, 0, 10, 10);
        assert!(!negative.fits_within(100, 100));
    }
}
