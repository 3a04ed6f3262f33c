use figstyle::document::{FontPatch, LayoutConstants};
use figstyle::{
    BasicDocument, Document, DocumentClass, OutputMode, PostBuildAdjustments, StyleConfig,
    StyleError, StyleOptions,
};

/// Document that only records what it was asked to do.
#[derive(Default)]
struct Recorder {
    footnotesize: f64,
    updates: Vec<StyleConfig>,
    layouts: Vec<LayoutConstants>,
}

impl Document for Recorder {
    fn new(_class: DocumentClass, _style: StyleConfig) -> Self {
        Recorder {
            footnotesize: 9.0,
            ..Default::default()
        }
    }

    fn footnotesize(&self) -> f64 {
        self.footnotesize
    }

    fn update_style(&mut self, partial: StyleConfig) {
        self.updates.push(partial);
    }

    fn set_layout(&mut self, layout: &LayoutConstants) {
        self.layouts.push(*layout);
    }
}

#[test]
fn presentation_sets_slide_layout_in_points() {
    let style = StyleOptions::default()
        .with_mode(OutputMode::Presentation)
        .build()
        .unwrap();
    let doc: BasicDocument = style.into_document().unwrap();
    assert_eq!(doc.columnwidth(), 13.33 * 72.0);
    assert_eq!(doc.textwidth(), 7.5 * 72.0);
    assert_eq!(doc.style().get_f64("font.size"), Some(28.0));
}

#[test]
fn paper_keeps_class_layout_and_shrinks_fonts() {
    let style = StyleOptions::default()
        .with_document_class(DocumentClass::Usenix)
        .build()
        .unwrap();
    let doc: BasicDocument = style.into_document().unwrap();
    let m = DocumentClass::Usenix.metrics();
    assert_eq!(doc.columnwidth(), m.columnwidth);
    assert_eq!(doc.textwidth(), m.textwidth);
    assert_eq!(doc.style().get_f64("font.size"), Some(m.footnotesize - 1.0));
    assert_eq!(doc.style().get_f64("legend.fontsize"), Some(m.footnotesize - 2.0));
    assert_eq!(doc.style().get_f64("lines.linewidth"), Some(0.8));
}

#[test]
fn patch_uses_size_reported_by_document() {
    let style = StyleOptions::default().build().unwrap();
    let doc: Recorder = style.into_document().unwrap();
    assert!(doc.layouts.is_empty());
    assert_eq!(doc.updates.len(), 1);
    assert_eq!(doc.updates[0].get_f64("axes.titlesize"), Some(8.0));
    assert_eq!(doc.updates[0].get_f64("ytick.labelsize"), Some(7.0));
}

#[test]
fn paper_without_small_font_is_untouched() {
    let style = StyleOptions::default()
        .with_paper_small_font(false)
        .build()
        .unwrap();
    let doc: Recorder = style.into_document().unwrap();
    assert!(doc.updates.is_empty());
    assert!(doc.layouts.is_empty());
}

#[test]
fn presentation_never_gets_font_patch() {
    let style = StyleOptions::default()
        .with_mode(OutputMode::Presentation)
        .with_paper_small_font(true)
        .build()
        .unwrap();
    let doc: Recorder = style.into_document().unwrap();
    assert!(doc.updates.is_empty());
    assert_eq!(doc.layouts.len(), 1);

    let mut doc = Recorder::new(DocumentClass::Ieee, StyleConfig::new());
    assert!(matches!(
        FontPatch::default().apply(&mut doc, OutputMode::Presentation),
        Err(StyleError::ContractViolation(_))
    ));
    assert!(doc.updates.is_empty());
    assert!(doc.layouts.is_empty());
}

#[test]
fn paper_adjustments_never_carry_slide_layout() {
    for small_font in [true, false] {
        let style = StyleOptions::default()
            .with_paper_small_font(small_font)
            .build()
            .unwrap();
        assert!(style.adjustments().layout().is_none());
        let doc: BasicDocument = style.into_document().unwrap();
        assert_eq!(doc.columnwidth(), DocumentClass::Usenix.metrics().columnwidth);
    }
}

#[test]
fn deserialized_adjustments_are_one_variant() {
    let slides: PostBuildAdjustments =
        serde_json::from_str(r#"{"slides":{"columnwidth":959.76,"textwidth":540.0}}"#).unwrap();
    assert!(slides.font_patch().is_none());

    let mut doc = BasicDocument::new(DocumentClass::Usenix, StyleConfig::new());
    slides.apply(&mut doc).unwrap();
    assert_eq!(doc.textwidth(), 540.0);
    assert!(doc.style().is_empty());

    assert!(
        serde_json::from_str::<PostBuildAdjustments>(
            r#"{"mode":"paper","layout":{"columnwidth":959.76,"textwidth":540.0}}"#
        )
        .is_err()
    );
}
