/// Text frame and paragraph types for PPTX shapes.
use crate::common::RGBColor;
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::error::Result;
use std::fmt::Write as FmtWrite;

use super::super::format::{Alignment, Font};

/// A paragraph of a text frame.
///
/// Font properties apply to every run of the paragraph, including the runs
/// either side of a line break.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    text: String,
    font: Font,
    alignment: Option<Alignment>,
}

impl Paragraph {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    /// Builder method: set font size in points.
    pub fn size(&mut self, size: f64) -> &mut Self {
        self.font.size = Some(size);
        self
    }

    /// Builder method: set bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.font.bold = Some(bold);
        self
    }

    /// Builder method: set text color.
    pub fn color(&mut self, color: RGBColor) -> &mut Self {
        self.font.color = Some(color);
        self
    }

    /// Builder method: set horizontal alignment.
    pub fn align(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    /// Generate the `<a:p>` element.
    ///
    /// Line feeds inside the text become `<a:br/>` soft breaks, so the lines
    /// stay in one paragraph.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");

        if let Some(alignment) = self.alignment {
            write!(xml, r#"<a:pPr algn="{}"/>"#, alignment.as_str())?;
        }

        if self.text.is_empty() {
            write_run_properties(xml, "a:endParaRPr", &self.font)?;
        } else {
            for (index, line) in self.text.split('\n').enumerate() {
                if index > 0 {
                    xml.push_str("<a:br>");
                    write_run_properties(xml, "a:rPr", &self.font)?;
                    xml.push_str("</a:br>");
                }
                if line.is_empty() {
                    continue;
                }
                xml.push_str("<a:r>");
                write_run_properties(xml, "a:rPr", &self.font)?;
                write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
                xml.push_str("</a:r>");
            }
        }

        xml.push_str("</a:p>");
        Ok(())
    }
}

/// Write `<a:rPr>`-shaped character properties under the given tag name.
fn write_run_properties(xml: &mut String, tag: &str, font: &Font) -> Result<()> {
    write!(xml, r#"<{} lang="en-US""#, tag)?;

    if let Some(size) = font.size {
        write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
    }

    match font.bold {
        Some(true) => xml.push_str(r#" b="1""#),
        Some(false) => xml.push_str(r#" b="0""#),
        None => {},
    }

    xml.push_str(r#" dirty="0""#);

    match font.color {
        Some(color) => {
            xml.push('>');
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
            write!(xml, "</{}>", tag)?;
        },
        None => xml.push_str("/>"),
    }

    Ok(())
}

/// The text body of a shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFrame {
    /// `None` keeps the shape kind's default wrapping
    word_wrap: Option<bool>,
    paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Builder method: enable or disable word wrap.
    pub fn word_wrap(&mut self, wrap: bool) -> &mut Self {
        self.word_wrap = Some(wrap);
        self
    }

    pub fn is_word_wrapped(&self) -> Option<bool> {
        self.word_wrap
    }

    /// Append a paragraph and return it for formatting.
    pub fn add_paragraph(&mut self, text: &str) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::new(text));
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Plain text of the frame, one line per paragraph.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Generate `<a:lstStyle/>` and the paragraphs of a `<p:txBody>`.
    ///
    /// A text body must hold at least one paragraph, so an empty frame still
    /// writes a bare `<a:p/>`.
    pub(crate) fn write_paragraphs(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:lstStyle/>");
        if self.paragraphs.is_empty() {
            xml.push_str("<a:p/>");
        }
        for paragraph in &self.paragraphs {
            paragraph.to_xml(xml)?;
        }
        Ok(())
    }
}
