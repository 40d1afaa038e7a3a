use proptest::prelude::*;
use rtlscribe::builder::split_lines;
use rtlscribe::ooxml::docx::DocxSummary;
use rtlscribe::ooxml::docx::reader::ParagraphSummary;
use rtlscribe::{DocumentBuilder, FormatPolicy, LineKind, classify};

const LIST_RIGHT_INDENT: i64 = 425;
const LIST_FIRST_LINE: i64 = -283;
const MARGIN: i64 = 850;

fn build(raw: &str) -> DocxSummary {
    let bytes = rtlscribe::build(raw).expect("build failed");
    DocxSummary::from_bytes(&bytes).expect("read-back failed")
}

fn assert_rtl_paragraph(para: &ParagraphSummary) {
    assert_eq!(para.alignment.as_deref(), Some("right"));
    assert!(para.bidi, "paragraph must carry w:bidi");
    assert!(para.mark_rtl, "paragraph mark must be rtl");
    assert_eq!(para.space_before, Some(0));
    assert_eq!(para.space_after, Some(0));
    assert_eq!(para.line, Some(240));
    assert_eq!(para.line_rule.as_deref(), Some("auto"));
    assert_eq!(para.indent_left, None);
    assert_eq!(para.runs.len(), 1);
    let run = &para.runs[0];
    assert!(run.rtl);
    assert!(run.fonts.all_are("Arial"));
    assert_eq!(run.size, Some(24));
    assert_eq!(run.size_cs, Some(24));
}

fn assert_hanging(para: &ParagraphSummary) {
    assert_eq!(para.indent_right, Some(LIST_RIGHT_INDENT));
    assert_eq!(para.indent_first_line, Some(LIST_FIRST_LINE));
}

fn assert_page_setup(summary: &DocxSummary) {
    let section = &summary.section;
    for margin in [
        section.margin_top,
        section.margin_right,
        section.margin_bottom,
        section.margin_left,
    ] {
        assert_eq!(margin, Some(MARGIN));
    }
    assert_eq!(section.border_offset.as_deref(), Some("page"));
    let sides: Vec<_> = section.borders.iter().map(|b| b.side.as_str()).collect();
    assert_eq!(sides, ["top", "left", "bottom", "right"]);
    for border in &section.borders {
        assert_eq!(border.style.as_deref(), Some("double"));
        assert_eq!(border.size, Some(12));
        assert_eq!(border.space, Some(12));
        assert_eq!(border.color.as_deref(), Some("auto"));
    }

    assert_eq!(summary.style_count("Normal"), 1);
    let normal = summary.style("Normal").expect("Normal style");
    assert!(normal.fonts.all_are("Arial"));
    assert_eq!(normal.size, Some(24));
}

#[test]
fn scenario_single_plain_line() {
    let summary = build("سلام");
    assert_eq!(summary.paragraphs.len(), 1);
    let para = &summary.paragraphs[0];
    assert_rtl_paragraph(para);
    assert_eq!(para.indent_right, None);
    assert_eq!(para.indent_first_line, None);
    assert_eq!(para.text(), "سلام");
}

#[test]
fn scenario_bullet_lines() {
    let raw = "• مورد اول\n• مورد دوم";
    for line in raw.lines() {
        assert_eq!(classify(line), LineKind::Bullet);
    }

    let summary = build(raw);
    assert_eq!(summary.paragraphs.len(), 2);
    for para in &summary.paragraphs {
        assert_rtl_paragraph(para);
        assert_hanging(para);
    }
    assert_eq!(summary.paragraphs[1].text(), "• مورد دوم");
}

#[test]
fn scenario_persian_numbered_line() {
    assert_eq!(classify("۱. مورد اول"), LineKind::Numbered);
    let summary = build("۱. مورد اول");
    assert_eq!(summary.paragraphs.len(), 1);
    assert_hanging(&summary.paragraphs[0]);
}

#[test]
fn scenario_empty_input_gives_one_empty_paragraph() {
    let summary = build("");
    assert_eq!(summary.paragraphs.len(), 1);
    assert_rtl_paragraph(&summary.paragraphs[0]);
    assert_eq!(summary.paragraphs[0].text(), "");
}

#[test]
fn scenario_page_setup_on_every_document() {
    for raw in ["", "سلام", "• a\n1) b\n\nc", "\u{200F}▪ x\r\ny"] {
        assert_page_setup(&build(raw));
    }
}

#[test]
fn trailing_newline_does_not_add_paragraph() {
    assert_eq!(build("a\nb").paragraphs.len(), build("a\nb\n").paragraphs.len());
    assert_eq!(build("a\r\nb\r\n").paragraphs.len(), 2);
    assert_eq!(build("\n").paragraphs.len(), 1);
}

#[test]
fn blank_interior_lines_are_kept() {
    let summary = build("a\n\n\nb");
    let texts: Vec<_> = summary.paragraphs.iter().map(|p| p.text()).collect();
    assert_eq!(texts, ["a", "", "", "b"]);
}

#[test]
fn form_feed_and_vertical_tab_end_lines() {
    let summary = build("a\u{c}b\u{b}c");
    let texts: Vec<_> = summary.paragraphs.iter().map(|p| p.text()).collect();
    assert_eq!(texts, ["a", "b", "c"]);
}

#[test]
fn tabs_are_tab_stops() {
    let bytes = rtlscribe::build("1)\tمورد\tدوم").unwrap();
    let summary = DocxSummary::from_bytes(&bytes).unwrap();

    let para = &summary.paragraphs[0];
    assert_rtl_paragraph(para);
    assert_eq!(para.text(), "1)\tمورد\tدوم");
    assert_hanging(para);
}

#[test]
fn build_is_idempotent() {
    let raw = "\u{200F}• مورد\n۲) دوم\nمتن ساده & <نشانه>";
    let first = build(raw);
    let second = build(raw);
    assert_eq!(first.paragraphs.len(), second.paragraphs.len());
    for (a, b) in first.paragraphs.iter().zip(&second.paragraphs) {
        assert_eq!(a.alignment, b.alignment);
        assert_eq!(a.indent_right, b.indent_right);
        assert_eq!(a.indent_first_line, b.indent_first_line);
        assert_eq!(a.text(), b.text());
    }
}

#[test]
fn package_has_expected_parts() {
    let summary = build("x");
    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "word/document.xml",
        "word/_rels/document.xml.rels",
        "word/styles.xml",
        "word/settings.xml",
        "docProps/core.xml",
        "docProps/app.xml",
    ] {
        assert!(summary.has_part(part), "missing {part}");
    }
}

#[test]
fn custom_policy_flows_into_document() {
    let policy = FormatPolicy::from_yaml_str(
        "font_family: Tahoma\nfont_size_pt: 14\nmargin_cm: 2.54\nborder:\n  style: single\n",
    )
    .unwrap();
    let builder = DocumentBuilder::new(policy).unwrap();
    let summary = DocxSummary::from_bytes(&builder.build("• x").unwrap()).unwrap();

    assert_eq!(summary.section.margin_left, Some(1440));
    assert!(summary.section.borders.iter().all(|b| b.style.as_deref() == Some("single")));
    let run = &summary.paragraphs[0].runs[0];
    assert!(run.fonts.all_are("Tahoma"));
    assert_eq!(run.size, Some(28));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_one_paragraph_per_line(lines in prop::collection::vec("[a-zA-Z0-9 •▪۰-۹.)\u{200F}ا-ی]{0,12}", 1..6)) {
        let raw = lines.join("\n");
        let summary = build(&raw);

        let expected = split_lines(&raw);
        prop_assert_eq!(summary.paragraphs.len(), expected.len());
        for (para, line) in summary.paragraphs.iter().zip(&expected) {
            prop_assert_eq!(&para.text(), line);
            prop_assert_eq!(para.indent_first_line.is_some(), classify(line).is_list_item());
        }
    }
}
