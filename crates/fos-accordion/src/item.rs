//! Accordion item
//!
//! A `<nav-accordion-item>` owns a generated trigger button and a content
//! region. Attaching an item moves its declared children into the region
//! and prepends the trigger.

use std::sync::LazyLock;

use fos_a11y::{AriaAttributes, AriaRole, AriaState, TabIndex, FOCUSABLE_SELECTORS};
use fos_dom::{Document, DomResult, DomTree, FocusTransition, NodeId, SelectorList};
use tracing::{debug, trace};

use crate::{AccordionError, AccordionOptions, ExpandState, ItemId, EXPANDED_ATTR};

/// `label` attribute on `<nav-accordion-item>`
pub const LABEL_ATTR: &str = "label";
/// Dataset key marking the generated trigger
pub const TRIGGER_DATA_KEY: &str = "accordionItemButton";
/// Dataset key marking the generated region
pub const REGION_DATA_KEY: &str = "accordionItemSection";

static FOCUSABLE: LazyLock<SelectorList> =
    LazyLock::new(|| SelectorList::from_parts(FOCUSABLE_SELECTORS).expect("focusable selectors are valid"));

fn set_aria(tree: &mut DomTree, node: NodeId, state: AriaState) -> DomResult<()> {
    tree.set_attribute(node, state.attribute_name(), state.attribute_value())?;
    Ok(())
}

/// Validated attributes of an item that has not been attached yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDeclaration {
    pub element: NodeId,
    pub id: ItemId,
    pub label: String,
    pub state: ExpandState,
}

impl ItemDeclaration {
    /// Read `label`, `id` and `expanded` from an item element
    pub fn read(tree: &DomTree, element: NodeId) -> Result<Self, AccordionError> {
        let label = tree
            .get_attribute(element, LABEL_ATTR)
            .filter(|label| !label.is_empty())
            .ok_or(AccordionError::MissingLabel { node: element })?;
        let id = tree
            .get_attribute(element, "id")
            .filter(|id| !id.is_empty())
            .ok_or(AccordionError::MissingId { node: element })?;

        Ok(Self {
            element,
            id: ItemId::parse(id)?,
            label: label.to_string(),
            state: ExpandState::from_attribute(tree.get_attribute(element, EXPANDED_ATTR)),
        })
    }
}

/// Mounted accordion item
#[derive(Debug, Clone)]
pub struct AccordionItem {
    element: NodeId,
    container: NodeId,
    id: ItemId,
    label: String,
    trigger: NodeId,
    region: NodeId,
    state: ExpandState,
    /// Region descendants whose tabindex this item controls
    managed: Vec<NodeId>,
}

impl AccordionItem {
    /// Build trigger and region for a declared item and reflect its state
    pub(crate) fn attach(
        tree: &mut DomTree,
        declaration: ItemDeclaration,
        container: NodeId,
        options: &AccordionOptions,
    ) -> Result<Self, AccordionError> {
        let ItemDeclaration { element, id, label, state } = declaration;

        let content: Vec<NodeId> = tree.children(element).map(|(child, _)| child).collect();
        let region = tree.create_element("div");
        tree.set_data(region, REGION_DATA_KEY, "")?;
        for node in content {
            tree.append_child(region, node)?;
        }
        tree.append_child(element, region)?;

        let trigger = tree.create_element("button");
        tree.set_data(trigger, TRIGGER_DATA_KEY, "")?;
        let text = tree.create_text(&label);
        tree.append_child(trigger, text)?;
        tree.prepend_child(element, trigger)?;

        let trigger_id = id.trigger_id();
        let region_id = id.region_id();
        tree.set_attribute(trigger, "tabindex", TabIndex::REACHABLE.as_attribute())?;
        tree.set_attribute(trigger, "id", trigger_id.as_str())?;
        set_aria(tree, trigger, AriaState::Controls(vec![region_id.clone()]))?;
        tree.set_attribute(region, "id", region_id)?;
        tree.set_attribute(region, "role", AriaRole::Region.as_str())?;
        set_aria(tree, region, AriaState::LabelledBy(vec![trigger_id]))?;

        let mut item = Self {
            element,
            container,
            id,
            label,
            trigger,
            region,
            state,
            managed: Vec::new(),
        };
        item.reflect(tree, options)?;
        debug!("Attached accordion item {} ({})", item.id, item.state.attribute_value());
        Ok(item)
    }

    pub fn element(&self) -> NodeId {
        self.element
    }

    /// Owning `<nav-accordion>` element
    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn trigger(&self) -> NodeId {
        self.trigger
    }

    pub fn region(&self) -> NodeId {
        self.region
    }

    pub fn state(&self) -> ExpandState {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    /// Reads the trigger's live `aria-disabled`
    pub fn is_trigger_disabled(&self, tree: &DomTree) -> bool {
        AriaAttributes::from_attributes(tree.attributes(self.trigger)).is_disabled()
    }

    /// Focusable region content, including nodes made unreachable earlier
    pub fn focusable_content(&self, tree: &DomTree) -> Vec<NodeId> {
        let mut nodes = tree.query_selector_all(self.region, &FOCUSABLE);
        for &node in &self.managed {
            if !nodes.contains(&node) && node != self.region && tree.contains(self.region, node) {
                nodes.push(node);
            }
        }
        nodes
    }

    pub(crate) fn set_state(
        &mut self,
        tree: &mut DomTree,
        state: ExpandState,
        options: &AccordionOptions,
    ) -> DomResult<()> {
        self.state = state;
        self.reflect(tree, options)
    }

    /// Write every projection of the current state to the DOM
    pub(crate) fn reflect(&mut self, tree: &mut DomTree, options: &AccordionOptions) -> DomResult<()> {
        tree.set_attribute(self.element, EXPANDED_ATTR, self.state.attribute_value())?;
        set_aria(tree, self.trigger, self.state.trigger_state())?;
        if self.state.trigger_disabled(options) {
            set_aria(tree, self.trigger, AriaState::Disabled(true))?;
        } else {
            tree.remove_attribute(self.trigger, "aria-disabled")?;
        }
        set_aria(tree, self.region, self.state.region_state())?;

        let tab_index = self.state.content_tab_index().as_attribute();
        let content = self.focusable_content(tree);
        for &node in &content {
            tree.set_attribute(node, "tabindex", tab_index.as_str())?;
        }
        trace!("Reflected {} onto {} focusable node(s)", self.id, content.len());
        self.managed = content;
        Ok(())
    }

    /// Focus the trigger
    pub fn focus(&self, document: &mut Document) -> DomResult<FocusTransition> {
        document.focus(self.trigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared(tree: &mut DomTree, attrs: &[(&str, &str)]) -> NodeId {
        let root = tree.root();
        let element = tree.create_element("nav-accordion-item");
        for (name, value) in attrs {
            tree.set_attribute(element, name, *value).unwrap();
        }
        tree.append_child(root, element).unwrap();
        element
    }

    #[test]
    fn test_read_declaration() {
        let mut tree = DomTree::new();
        let element = declared(&mut tree, &[("label", "FAQ"), ("id", "faq"), ("expanded", "true")]);
        let decl = ItemDeclaration::read(&tree, element).unwrap();
        assert_eq!(decl.label, "FAQ");
        assert_eq!(decl.id.as_str(), "faq");
        assert_eq!(decl.state, ExpandState::Expanded);
    }

    #[test]
    fn test_read_missing_attributes() {
        let mut tree = DomTree::new();
        let no_label = declared(&mut tree, &[("id", "faq")]);
        let empty_label = declared(&mut tree, &[("label", ""), ("id", "faq")]);
        let no_id = declared(&mut tree, &[("label", "FAQ")]);
        let bad_id = declared(&mut tree, &[("label", "FAQ"), ("id", "two words")]);

        assert!(matches!(ItemDeclaration::read(&tree, no_label), Err(AccordionError::MissingLabel { .. })));
        assert!(matches!(ItemDeclaration::read(&tree, empty_label), Err(AccordionError::MissingLabel { .. })));
        assert!(matches!(ItemDeclaration::read(&tree, no_id), Err(AccordionError::MissingId { .. })));
        assert!(matches!(ItemDeclaration::read(&tree, bad_id), Err(AccordionError::InvalidId(_))));
    }

    #[test]
    fn test_attach_structure() {
        let mut tree = DomTree::new();
        let element = declared(&mut tree, &[("label", "FAQ"), ("id", "faq")]);
        let para = tree.create_element("p");
        let link = tree.create_element("a");
        tree.append_child(element, para).unwrap();
        tree.append_child(para, link).unwrap();

        let decl = ItemDeclaration::read(&tree, element).unwrap();
        let item = AccordionItem::attach(&mut tree, decl, NodeId::ROOT, &AccordionOptions::default()).unwrap();

        let children: Vec<_> = tree.element_children(element).collect();
        assert_eq!(children, vec![item.trigger(), item.region()]);
        assert_eq!(tree.parent(para), Some(item.region()));

        assert_eq!(tree.text_content(item.trigger()), "FAQ");
        assert_eq!(tree.get_attribute(item.trigger(), "id"), Some("label-faq"));
        assert_eq!(tree.get_attribute(item.trigger(), "aria-controls"), Some("section-faq"));
        assert_eq!(tree.get_attribute(item.trigger(), "tabindex"), Some("0"));
        assert!(tree.has_attribute(item.trigger(), "data-accordion-item-button"));

        assert_eq!(tree.get_attribute(item.region(), "id"), Some("section-faq"));
        assert_eq!(tree.get_attribute(item.region(), "role"), Some("region"));
        assert_eq!(tree.get_attribute(item.region(), "aria-labelledby"), Some("label-faq"));
        assert_eq!(tree.get_attribute(item.region(), "aria-hidden"), Some("true"));
        assert!(tree.has_attribute(item.region(), "data-accordion-item-section"));

        assert_eq!(tree.get_attribute(element, "expanded"), Some("false"));
        assert_eq!(tree.get_attribute(item.trigger(), "aria-expanded"), Some("false"));
        assert!(!item.is_trigger_disabled(&tree));
        assert_eq!(tree.get_attribute(link, "tabindex"), Some("-1"));
    }

    #[test]
    fn test_reflect_restores_managed_content() {
        let mut tree = DomTree::new();
        let element = declared(&mut tree, &[("label", "FAQ"), ("id", "faq")]);
        let panel = tree.create_element("div");
        tree.set_attribute(panel, "tabindex", "0").unwrap();
        tree.append_child(element, panel).unwrap();

        let options = AccordionOptions { toggle: true, ..Default::default() };
        let decl = ItemDeclaration::read(&tree, element).unwrap();
        let mut item = AccordionItem::attach(&mut tree, decl, NodeId::ROOT, &options).unwrap();
        assert_eq!(tree.get_attribute(panel, "tabindex"), Some("-1"));

        item.set_state(&mut tree, ExpandState::Expanded, &options).unwrap();
        assert_eq!(tree.get_attribute(panel, "tabindex"), Some("0"));
        assert_eq!(item.focusable_content(&tree), vec![panel]);
    }

    #[test]
    fn test_expanded_single_disables_trigger() {
        let mut tree = DomTree::new();
        let element = declared(&mut tree, &[("label", "FAQ"), ("id", "faq"), ("expanded", "true")]);
        let decl = ItemDeclaration::read(&tree, element).unwrap();
        let item = AccordionItem::attach(&mut tree, decl, NodeId::ROOT, &AccordionOptions::default()).unwrap();
        assert_eq!(tree.get_attribute(item.trigger(), "aria-disabled"), Some("true"));
        assert!(item.is_trigger_disabled(&tree));
    }
}
