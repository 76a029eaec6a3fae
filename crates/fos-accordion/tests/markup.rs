//! Upgrading accordion markup: generated structure and configuration errors

use fos_accordion::{Accordion, AccordionError, AccordionHost, DocumentIds, IdRegistry, ACCORDION_TAG};
use fos_dom::serialize;

fn upgrade(html: &str) -> Result<AccordionHost, AccordionError> {
    AccordionHost::from_html(html)
}

fn single(id: &str) -> String {
    format!(r#"<nav-accordion><nav-accordion-item id="{id}" label="L"></nav-accordion-item></nav-accordion>"#)
}

#[test]
fn test_generated_markup() {
    let host = upgrade(
        r#"<nav-accordion><nav-accordion-item id="faq" label="Questions"><p>Answer</p></nav-accordion-item></nav-accordion>"#,
    )
    .unwrap();
    let document = host.document();
    let item = host.item("faq").unwrap();
    assert_eq!(
        serialize::outer_html(document.tree(), item.element()),
        concat!(
            r#"<nav-accordion-item id="faq" label="Questions" expanded="false">"#,
            r#"<button data-accordion-item-button="" tabindex="0" id="label-faq" aria-controls="section-faq" aria-expanded="false">Questions</button>"#,
            r#"<div data-accordion-item-section="" id="section-faq" role="region" aria-labelledby="label-faq" aria-hidden="true"><p>Answer</p></div>"#,
            "</nav-accordion-item>"
        )
    );
}

#[test]
fn test_slug_ids() {
    assert!(upgrade(&single("panel-1")).is_ok());
    for bad in ["panel_1", "panel 1", "-panel", "panel--1"] {
        let err = upgrade(&single(bad)).unwrap_err();
        assert!(err.is_configuration_error(), "{bad}");
        assert!(matches!(err, AccordionError::InvalidId(ref id) if id == bad));
    }
}

#[test]
fn test_duplicate_ids_in_one_accordion() {
    let err = upgrade(
        r#"<nav-accordion>
             <nav-accordion-item id="faq" label="One"></nav-accordion-item>
             <nav-accordion-item id="faq" label="Two"></nav-accordion-item>
           </nav-accordion>"#,
    )
    .unwrap_err();
    assert!(matches!(err, AccordionError::DuplicateId(ref id) if id == "faq"));
}

#[test]
fn test_duplicate_ids_across_accordions() {
    let html = format!("{}{}", single("faq"), single("faq"));
    assert!(matches!(upgrade(&html), Err(AccordionError::DuplicateId(_))));
}

#[test]
fn test_generated_ids_collide_with_declared_ids() {
    // Declared before and after the item whose trigger/region would reuse the id
    for ids in [["b", "label-b"], ["section-b", "b"]] {
        let items: String =
            ids.iter().map(|id| format!(r#"<nav-accordion-item id="{id}" label="L"></nav-accordion-item>"#)).collect();
        let html = format!("<nav-accordion>{items}</nav-accordion>");
        let err = upgrade(&html).unwrap_err();
        assert!(err.is_configuration_error());
        assert!(matches!(err, AccordionError::DuplicateId(ref id) if id != "b"), "{ids:?}");
    }
}

#[test]
fn test_nested_item_reusing_outer_trigger_id() {
    let html = format!(
        r#"<nav-accordion><nav-accordion-item id="outer" label="Outer">{}</nav-accordion-item></nav-accordion>"#,
        single("label-outer")
    );
    let err = upgrade(&html).unwrap_err();
    assert!(matches!(err, AccordionError::DuplicateId(ref id) if id == "label-outer"));
}

#[test]
fn test_generated_id_taken_by_other_element() {
    let html = format!(r#"<div id="section-faq"></div>{}"#, single("faq"));
    assert!(matches!(upgrade(&html), Err(AccordionError::DuplicateId(ref id)) if id == "section-faq"));
}

#[test]
fn test_id_taken_by_other_element() {
    let html = format!(r#"<section id="faq"></section>{}"#, single("faq"));
    assert!(matches!(upgrade(&html), Err(AccordionError::DuplicateId(_))));
}

#[test]
fn test_missing_attributes() {
    let no_label = r#"<nav-accordion><nav-accordion-item id="a"></nav-accordion-item></nav-accordion>"#;
    let no_id = r#"<nav-accordion><nav-accordion-item label="A"></nav-accordion-item></nav-accordion>"#;
    assert!(matches!(upgrade(no_label), Err(AccordionError::MissingLabel { .. })));
    assert!(matches!(upgrade(no_id), Err(AccordionError::MissingId { .. })));
}

#[test]
fn test_foreign_child_rejected() {
    let html = r#"<nav-accordion><div>stray</div></nav-accordion>"#;
    let err = upgrade(html).unwrap_err();
    assert!(matches!(err, AccordionError::NotAnItem { ref found, .. } if found == "div"));
}

#[test]
fn test_text_children_ignored() {
    let html = r#"<nav-accordion> loose text <!-- note --><nav-accordion-item id="a" label="A"></nav-accordion-item></nav-accordion>"#;
    let host = upgrade(html).unwrap();
    assert_eq!(host.accordion(0).unwrap().len(), 1);
}

#[test]
fn test_orphan_item_rejected() {
    let html = r#"<div><nav-accordion-item id="a" label="A"></nav-accordion-item></div>"#;
    let err = upgrade(html).unwrap_err();
    assert!(matches!(err, AccordionError::NotAnAccordion { ref found, .. } if found == "<div>"));
}

#[test]
fn test_many_expanded_rejected() {
    let html = r#"<nav-accordion>
        <nav-accordion-item id="a" label="A" expanded="true"></nav-accordion-item>
        <nav-accordion-item id="b" label="B" expanded="true"></nav-accordion-item>
    </nav-accordion>"#;
    assert!(matches!(upgrade(html), Err(AccordionError::MultipleExpanded { count: 2 })));
    assert!(upgrade(&html.replace("<nav-accordion>", "<nav-accordion allow-multiple>")).is_ok());
}

#[test]
fn test_lenient_expanded_values() {
    let html = r#"<nav-accordion>
        <nav-accordion-item id="a" label="A" expanded="yes"></nav-accordion-item>
        <nav-accordion-item id="b" label="B" expanded></nav-accordion-item>
        <nav-accordion-item id="c" label="C" expanded="true"></nav-accordion-item>
    </nav-accordion>"#;
    let host = upgrade(html).unwrap();
    let active: Vec<_> = host.accordion(0).unwrap().active_items().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(active, vec!["c"]);
    let a = host.item("a").unwrap();
    assert_eq!(host.document().tree().get_attribute(a.element(), "expanded"), Some("false"));
}

#[test]
fn test_upgrade_is_idempotent() {
    let mut host = upgrade(&single("a")).unwrap();
    assert_eq!(host.upgrade().unwrap(), 0);
    assert_eq!(host.accordions().len(), 1);
    assert_eq!(host.accordion(0).unwrap().item(0).unwrap().id().as_str(), "a");
}

#[test]
fn test_custom_id_registry() {
    let mut host = AccordionHost::new(fos_html::parse(&single("taken")).unwrap()).unwrap();
    let tree = host.document().tree();
    let container =
        tree.descendants(tree.root()).into_iter().find(|&n| tree.is_element_named(n, ACCORDION_TAG)).unwrap();

    let mut ids = DocumentIds::new();
    ids.claim("taken");
    let err = Accordion::mount(host.document_mut().tree_mut(), container, &mut ids).unwrap_err();
    assert!(matches!(err, AccordionError::DuplicateId(_)));
}
