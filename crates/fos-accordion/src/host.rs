//! Accordion host
//!
//! Owns a parsed document and the custom element registry, upgrades
//! accordion markup and routes UI events to the mounted components. Focus
//! changes are turned into focusin/focusout on the affected containers.

use std::collections::HashSet;

use fos_dom::{CustomElementRegistry, Document, FocusTransition, NodeId, UiEvent, UiEventType};
use tracing::{debug, info, trace};

use crate::{
    define_elements, Accordion, AccordionError, AccordionItem, DocumentIds, PageSnapshot, ACCORDION_TAG, ITEM_TAG,
};

/// Document with upgraded accordions
#[derive(Debug)]
pub struct AccordionHost {
    document: Document,
    registry: CustomElementRegistry,
    accordions: Vec<Accordion>,
}

impl AccordionHost {
    /// Host for a document; call [`AccordionHost::upgrade`] to mount
    pub fn new(document: Document) -> Result<Self, AccordionError> {
        let mut registry = CustomElementRegistry::new();
        define_elements(&mut registry)?;
        Ok(Self {
            document,
            registry,
            accordions: Vec::new(),
        })
    }

    /// Parse HTML and upgrade every accordion in it
    pub fn from_html(html: &str) -> Result<Self, AccordionError> {
        let document = fos_html::parse(html)?;
        let mut host = Self::new(document)?;
        host.upgrade()?;
        Ok(host)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn registry(&self) -> &CustomElementRegistry {
        &self.registry
    }

    /// Mounted accordions in document order
    pub fn accordions(&self) -> &[Accordion] {
        &self.accordions
    }

    pub fn accordion(&self, index: usize) -> Option<&Accordion> {
        self.accordions.get(index)
    }

    pub fn accordion_mut(&mut self, index: usize) -> Option<&mut Accordion> {
        self.accordions.get_mut(index)
    }

    /// Accordion mounted on a `<nav-accordion>` element
    pub fn accordion_for(&self, element: NodeId) -> Option<&Accordion> {
        self.accordions.iter().find(|accordion| accordion.element() == element)
    }

    /// Container of a mounted item
    pub fn container_of(&self, item: &AccordionItem) -> Option<&Accordion> {
        self.accordion_for(item.container())
    }

    /// Locate an item by id: (accordion index, item index)
    pub fn find_item(&self, id: &str) -> Option<(usize, usize)> {
        self.accordions.iter().enumerate().find_map(|(a, accordion)| {
            accordion.items().iter().position(|item| item.id().as_str() == id).map(|i| (a, i))
        })
    }

    pub fn item(&self, id: &str) -> Option<&AccordionItem> {
        let (a, i) = self.find_item(id)?;
        self.accordions[a].item(i)
    }

    /// Expand or collapse an item by id, bypassing user-event policy
    pub fn set_expanded(&mut self, id: &str, expanded: bool) -> Result<(), AccordionError> {
        let (a, i) = self.find_item(id).ok_or_else(|| AccordionError::UnknownItem(id.to_string()))?;
        self.accordions[a].set_expanded(self.document.tree_mut(), i, expanded)
    }

    /// Mount every accordion not mounted yet, in document order
    ///
    /// Returns how many accordions were mounted. Fails on the first invalid
    /// accordion or on an item outside any `<nav-accordion>`.
    pub fn upgrade(&mut self) -> Result<usize, AccordionError> {
        let tree = self.document.tree();
        let candidates = self.registry.upgrade_candidates(tree, tree.root());
        let mounted_items: HashSet<NodeId> = self
            .accordions
            .iter()
            .flat_map(|accordion| accordion.items().iter().map(AccordionItem::element))
            .collect();
        let mut ids = DocumentIds::scan(&self.document, |node| {
            tree.is_element_named(node, ITEM_TAG) && !mounted_items.contains(&node)
        });

        let mut mounted = 0;
        for node in candidates {
            let tree = self.document.tree();
            if tree.is_element_named(node, ITEM_TAG) {
                let parent = tree.parent(node);
                if !parent.is_some_and(|p| tree.is_element_named(p, ACCORDION_TAG)) {
                    let found = parent
                        .and_then(|p| tree.tag_name(p))
                        .map_or_else(|| "no element parent".to_string(), |tag| format!("<{tag}>"));
                    return Err(AccordionError::NotAnAccordion { node, found });
                }
                continue;
            }
            if self.accordion_for(node).is_some() {
                continue;
            }
            let accordion = Accordion::mount(self.document.tree_mut(), node, &mut ids)?;
            self.accordions.push(accordion);
            mounted += 1;
        }
        info!("Upgraded {} accordion(s)", mounted);
        Ok(mounted)
    }

    fn locate_trigger(&self, node: NodeId) -> Option<(usize, usize)> {
        let tree = self.document.tree();
        self.accordions
            .iter()
            .enumerate()
            .find_map(|(a, accordion)| accordion.position_of_trigger(tree, node).map(|i| (a, i)))
    }

    /// Deliver an event; returns it with its default-prevented flag set
    pub fn dispatch(&mut self, mut event: UiEvent) -> Result<UiEvent, AccordionError> {
        match event.event_type {
            UiEventType::Click | UiEventType::KeyDown => {
                let Some((a, i)) = self.locate_trigger(event.target) else {
                    trace!("No accordion trigger at {}", event.target);
                    return Ok(event);
                };
                let before = self.document.active_element();
                let accordion = &mut self.accordions[a];
                if event.event_type == UiEventType::Click {
                    accordion.handle_click(self.document.tree_mut(), i, &mut event)?;
                } else {
                    accordion.handle_key_down(&mut self.document, i, &mut event)?;
                }
                let current = self.document.active_element();
                self.notify_focus(FocusTransition { previous: before, current })?;
            }
            UiEventType::FocusIn | UiEventType::FocusOut => self.deliver_focus_event(&event)?,
        }
        Ok(event)
    }

    fn deliver_focus_event(&mut self, event: &UiEvent) -> Result<(), AccordionError> {
        let tree = self.document.tree_mut();
        for accordion in &self.accordions {
            if !tree.contains(accordion.element(), event.target) {
                continue;
            }
            // Moves inside the same container keep the focus class
            if event.related_target.is_some_and(|r| tree.contains(accordion.element(), r)) {
                continue;
            }
            match event.event_type {
                UiEventType::FocusIn => accordion.handle_focus_in(tree)?,
                _ => accordion.handle_focus_out(tree)?,
            }
        }
        Ok(())
    }

    fn notify_focus(&mut self, transition: FocusTransition) -> Result<(), AccordionError> {
        if !transition.is_change() {
            return Ok(());
        }
        debug!("Focus {:?} -> {:?}", transition.previous, transition.current);
        if let Some(previous) = transition.previous {
            self.deliver_focus_event(&UiEvent::focus_out(previous, transition.current))?;
        }
        if let Some(current) = transition.current {
            self.deliver_focus_event(&UiEvent::focus_in(current, transition.previous))?;
        }
        Ok(())
    }

    /// Move focus to an element
    pub fn focus(&mut self, node: NodeId) -> Result<FocusTransition, AccordionError> {
        let transition = self.document.focus(node)?;
        self.notify_focus(transition)?;
        Ok(transition)
    }

    pub fn blur(&mut self) -> Result<FocusTransition, AccordionError> {
        let transition = self.document.blur();
        self.notify_focus(transition)?;
        Ok(transition)
    }

    /// Focus then click, like a pointer would
    pub fn click(&mut self, node: NodeId) -> Result<UiEvent, AccordionError> {
        self.focus(node)?;
        self.dispatch(UiEvent::click(node))
    }

    /// Keydown on the focused element; `None` when nothing has focus
    pub fn press_key(&mut self, code: &str) -> Result<Option<UiEvent>, AccordionError> {
        let Some(target) = self.document.active_element() else {
            return Ok(None);
        };
        self.dispatch(UiEvent::key_down(target, code)).map(Some)
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let tree = self.document.tree();
        PageSnapshot {
            focused: self
                .document
                .active_element()
                .and_then(|node| tree.get_attribute(node, "id"))
                .map(String::from),
            accordions: self.accordions.iter().map(|accordion| accordion.snapshot(tree)).collect(),
        }
    }
}
