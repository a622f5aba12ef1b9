use std::fs;
use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use aventra_deck::config::Settings;
use aventra_deck::{DeckError, build, build_with};

/// Fill, outline and text of one `<p:sp>`.
#[derive(Debug, Default)]
struct ShapeSummary {
    fill: Option<String>,
    line: Option<String>,
    texts: Vec<String>,
}

fn attribute(element: &BytesStart<'_>, name: &str) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == name.as_bytes())
        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
}

fn member(archive: &mut zip::ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut xml = String::new();
    archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing member {}", name))
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

fn summarize_slide(xml: &str) -> (Option<String>, Vec<ShapeSummary>) {
    let mut reader = Reader::from_str(xml);
    let mut slide_name = None;
    let mut shapes: Vec<ShapeSummary> = Vec::new();
    let (mut in_sp_pr, mut in_ln, mut in_text) = (false, false, false);

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => match e.name().as_ref() {
                b"p:cSld" => slide_name = attribute(&e, "name"),
                b"p:sp" => shapes.push(ShapeSummary::default()),
                b"p:spPr" => in_sp_pr = true,
                b"a:ln" => in_ln = true,
                b"a:t" => {
                    in_text = true;
                    if let Some(shape) = shapes.last_mut() {
                        shape.texts.push(String::new());
                    }
                },
                _ => {},
            },
            Event::Empty(e) if e.name().as_ref() == b"a:srgbClr" && in_sp_pr => {
                let value = attribute(&e, "val");
                if let Some(shape) = shapes.last_mut() {
                    if in_ln {
                        shape.line = value;
                    } else {
                        shape.fill = value;
                    }
                }
            },
            Event::Text(t) if in_text => {
                if let Some(text) = shapes.last_mut().and_then(|shape| shape.texts.last_mut()) {
                    text.push_str(&String::from_utf8_lossy(&t));
                }
            },
            Event::End(e) => match e.name().as_ref() {
                b"p:spPr" => in_sp_pr = false,
                b"a:ln" => in_ln = false,
                b"a:t" => in_text = false,
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    (slide_name, shapes)
}

fn built_deck() -> (tempfile::TempDir, zip::ZipArchive<Cursor<Vec<u8>>>) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Aventra_Consulting_Company_Profile.pptx");
    let report = build(&path).unwrap();
    assert_eq!(report.slide_count, 11);

    let bytes = fs::read(&path).unwrap();
    (dir, zip::ZipArchive::new(Cursor::new(bytes)).unwrap())
}

#[test]
fn test_package_has_eleven_slides_in_order() {
    let (_dir, mut archive) = built_deck();

    let names: Vec<Option<String>> = (1..=11)
        .map(|n| summarize_slide(&member(&mut archive, &format!("ppt/slides/slide{}.xml", n))).0)
        .collect();
    let expected = [
        "Title",
        "About Us",
        "Our Values",
        "Services",
        "Services Detail",
        "Industries",
        "Global Presence",
        "Leadership",
        "Case Study",
        "Contact",
        "Thank You",
    ];
    for (name, expected) in names.iter().zip(expected) {
        assert_eq!(name.as_deref(), Some(expected));
    }
    assert!(archive.by_name("ppt/slides/slide12.xml").is_err());

    let presentation = member(&mut archive, "ppt/presentation.xml");
    assert_eq!(presentation.matches("<p:sldId ").count(), 11);
    assert!(presentation.contains(r#"<p:sldSz cx="12191695" cy="6858000"/>"#));

    let app = member(&mut archive, "docProps/app.xml");
    assert!(app.contains("<Slides>11</Slides>"));
}

#[test]
fn test_every_slide_points_at_blank_layout() {
    let (_dir, mut archive) = built_deck();
    for n in 1..=11 {
        let rels = member(&mut archive, &format!("ppt/slides/_rels/slide{}.xml.rels", n));
        assert!(rels.contains(r#"Target="../slideLayouts/slideLayout1.xml""#));
    }
    let content_types = member(&mut archive, "[Content_Types].xml");
    assert_eq!(content_types.matches("/ppt/slides/slide").count(), 11);
}

#[test]
fn test_title_slide_content() {
    let (_dir, mut archive) = built_deck();
    let (_, shapes) = summarize_slide(&member(&mut archive, "ppt/slides/slide1.xml"));

    assert_eq!(shapes.len(), 4);
    assert_eq!(shapes[0].fill.as_deref(), Some("003366"));
    assert_eq!(shapes[1].texts, vec!["AVENTRA CONSULTING"]);
    assert_eq!(shapes[3].texts, vec!["Company Profile 2025"]);
}

#[test]
fn test_values_and_geography_share_box_colors() {
    let (_dir, mut archive) = built_deck();
    let (_, values) = summarize_slide(&member(&mut archive, "ppt/slides/slide3.xml"));
    let (_, geography) = summarize_slide(&member(&mut archive, "ppt/slides/slide7.xml"));

    let value_fills: Vec<_> = values.iter().skip(2).step_by(3).map(|s| s.fill.clone()).collect();
    let region_fills: Vec<_> = geography.iter().skip(3).step_by(3).map(|s| s.fill.clone()).collect();

    let expected: Vec<Option<String>> = ["003366", "006699", "0099CC", "004C99"]
        .iter()
        .map(|hex| Some(hex.to_string()))
        .collect();
    assert_eq!(value_fills, expected);
    assert_eq!(region_fills, expected);
}

#[test]
fn test_services_rows_shade_from_primary_to_accent() {
    let (_dir, mut archive) = built_deck();
    let (_, shapes) = summarize_slide(&member(&mut archive, "ppt/slides/slide4.xml"));

    let fills: Vec<String> = shapes
        .iter()
        .skip(3)
        .step_by(2)
        .filter_map(|s| s.fill.clone())
        .collect();
    assert_eq!(fills.len(), 9);
    assert!(fills[..3].iter().all(|f| f == "003366"));
    assert!(fills[3..6].iter().all(|f| f == "006699"));
    assert!(fills[6..].iter().all(|f| f == "0099CC"));
}

#[test]
fn test_leadership_initials_and_borders() {
    let (_dir, mut archive) = built_deck();
    let (_, shapes) = summarize_slide(&member(&mut archive, "ppt/slides/slide8.xml"));

    let initials: Vec<&str> = shapes
        .iter()
        .skip(4)
        .step_by(4)
        .flat_map(|s| s.texts.iter().map(String::as_str))
        .collect();
    assert_eq!(initials, vec!["VG", "DG", "RM"]);

    for portrait in shapes.iter().skip(3).step_by(4) {
        assert_eq!(portrait.fill.as_deref(), Some("006699"));
        assert_eq!(portrait.line.as_deref(), Some("003366"));
    }
}

#[test]
fn test_rebuild_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.pptx");
    let second = dir.path().join("second.pptx");

    build(&first).unwrap();
    build(&second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_unwritable_path_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("deck.pptx");

    let err = build_with(&Settings::with_output_path(&path)).unwrap_err();
    assert!(matches!(err, DeckError::Io { .. }));
    assert!(err.to_string().contains("deck.pptx"));
    assert!(!path.exists());
}
