//! Presentation template module.
//!
//! Static parts every generated package carries: one theme, one slide master
//! with a single blank layout, and the presentation-level property parts.
//! The per-deck parts (presentation, slides, app properties) are generated.

/// Slide master with no placeholders and a single layout reference (`rId1`).
pub fn default_slide_master_xml() -> &'static str {
    include_str!("../../../resources/slideMasters/slideMaster1.xml")
}

/// Blank slide layout (no placeholders).
pub fn blank_slide_layout_xml() -> &'static str {
    include_str!("../../../resources/slideLayouts/slideLayout1.xml")
}

/// Office theme referenced by the shape style block of every autoshape.
pub fn default_theme_xml() -> &'static str {
    include_str!("../../../resources/theme/theme1.xml")
}

pub fn default_table_styles_xml() -> &'static str {
    include_str!("../../../resources/tableStyles.xml")
}

pub fn default_view_props_xml() -> &'static str {
    include_str!("../../../resources/viewProps.xml")
}

pub fn default_pres_props_xml() -> &'static str {
    include_str!("../../../resources/presProps.xml")
}

/// Core properties (title, subject, creator).
pub fn default_core_props_xml() -> &'static str {
    include_str!("../../../resources/docProps/core.xml")
}
