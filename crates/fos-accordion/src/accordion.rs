//! Accordion container
//!
//! `<nav-accordion>` validates its items, enforces the expansion policy and
//! provides roving keyboard focus over the item triggers.

use fos_a11y::{FocusOrder, KeyMap, NavAction};
use fos_dom::{Document, DomResult, DomTree, NodeId, UiEvent};
use tracing::{debug, info, trace};

use crate::item::{AccordionItem, ItemDeclaration};
use crate::{
    AccordionError, AccordionOptions, AccordionSnapshot, ExpandState, IdRegistry, ItemSnapshot, ACCORDION_TAG,
    EXPANDED_ATTR, FOCUS_CLASS, ITEM_TAG,
};

fn describe(tree: &DomTree, node: NodeId) -> String {
    tree.tag_name(node).unwrap_or("#non-element").to_string()
}

/// Mounted accordion
#[derive(Debug, Clone)]
pub struct Accordion {
    element: NodeId,
    options: AccordionOptions,
    items: Vec<AccordionItem>,
    keymap: KeyMap,
}

impl Accordion {
    /// Validate a `<nav-accordion>` element and attach all of its items
    ///
    /// Nothing is written to the tree unless every item is valid.
    pub fn mount(tree: &mut DomTree, element: NodeId, ids: &mut dyn IdRegistry) -> Result<Self, AccordionError> {
        if !tree.is_element_named(element, ACCORDION_TAG) {
            return Err(AccordionError::UnexpectedElement {
                node: element,
                expected: ACCORDION_TAG,
                found: describe(tree, element),
            });
        }
        let options = AccordionOptions::from_element(tree, element);

        let children: Vec<NodeId> = tree.element_children(element).collect();
        if let Some(&stray) = children.iter().find(|&&child| !tree.is_element_named(child, ITEM_TAG)) {
            return Err(AccordionError::NotAnItem { node: stray, found: describe(tree, stray) });
        }

        let expanded = children
            .iter()
            .filter(|&&child| ExpandState::from_attribute(tree.get_attribute(child, EXPANDED_ATTR)).is_expanded())
            .count();
        if !options.allow_multiple() && expanded > 1 {
            return Err(AccordionError::MultipleExpanded { count: expanded });
        }

        let declarations = children
            .iter()
            .map(|&child| {
                let declaration = ItemDeclaration::read(tree, child)?;
                // Generated trigger and region ids share the document namespace
                let claimed = [
                    declaration.id.to_string(),
                    declaration.id.trigger_id(),
                    declaration.id.region_id(),
                ];
                if let Some(taken) = claimed.iter().find(|id| ids.is_taken(id)) {
                    return Err(AccordionError::DuplicateId(taken.clone()));
                }
                for id in &claimed {
                    ids.claim(id);
                }
                Ok(declaration)
            })
            .collect::<Result<Vec<_>, AccordionError>>()?;

        let items = declarations
            .into_iter()
            .map(|declaration| AccordionItem::attach(tree, declaration, element, &options))
            .collect::<Result<Vec<_>, _>>()?;

        info!("Mounted accordion {} with {} item(s)", element, items.len());
        Ok(Self {
            element,
            options,
            items,
            keymap: KeyMap::accordion(),
        })
    }

    pub fn element(&self) -> NodeId {
        self.element
    }

    pub fn options(&self) -> AccordionOptions {
        self.options
    }

    pub fn allow_multiple(&self) -> bool {
        self.options.allow_multiple()
    }

    pub fn allow_toggle(&self) -> bool {
        self.options.allow_toggle()
    }

    pub fn allow_user_events(&self) -> bool {
        self.options.allow_user_events()
    }

    /// Key bindings used by [`Accordion::handle_key_down`]
    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Items in document order
    pub fn items(&self) -> &[AccordionItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&AccordionItem> {
        self.items.get(index)
    }

    pub fn item_by_id(&self, id: &str) -> Option<&AccordionItem> {
        self.items.iter().find(|item| item.id().as_str() == id)
    }

    /// Index of an item element
    pub fn position(&self, element: NodeId) -> Option<usize> {
        self.items.iter().position(|item| item.element() == element)
    }

    /// Index of the item whose trigger contains `node`
    pub fn position_of_trigger(&self, tree: &DomTree, node: NodeId) -> Option<usize> {
        self.items.iter().position(|item| tree.contains(item.trigger(), node))
    }

    /// Expanded items in document order
    pub fn active_items(&self) -> Vec<&AccordionItem> {
        self.items.iter().filter(|item| item.is_expanded()).collect()
    }

    fn check_index(&self, index: usize) -> Result<(), AccordionError> {
        if index < self.items.len() { Ok(()) } else { Err(AccordionError::ItemNotFound(index)) }
    }

    /// Set an item's state; expanding collapses the others unless multiple
    /// expansion is allowed
    pub fn set_expanded(&mut self, tree: &mut DomTree, index: usize, expanded: bool) -> Result<(), AccordionError> {
        self.check_index(index)?;
        let options = self.options;
        let state = ExpandState::from(expanded);

        if state.is_expanded() && !options.allow_multiple() {
            for (i, other) in self.items.iter_mut().enumerate() {
                if i != index && other.is_expanded() {
                    debug!("Collapsing {} in favour of item {}", other.id(), index);
                    other.set_state(tree, ExpandState::Collapsed, &options)?;
                }
            }
        }
        self.items[index].set_state(tree, state, &options)?;
        debug!("Item {} is now {:?}", self.items[index].id(), state);
        Ok(())
    }

    pub fn expand(&mut self, tree: &mut DomTree, index: usize) -> Result<(), AccordionError> {
        self.set_expanded(tree, index, true)
    }

    pub fn collapse(&mut self, tree: &mut DomTree, index: usize) -> Result<(), AccordionError> {
        self.set_expanded(tree, index, false)
    }

    pub fn toggle(&mut self, tree: &mut DomTree, index: usize) -> Result<(), AccordionError> {
        self.check_index(index)?;
        let expanded = self.items[index].state().toggled().is_expanded();
        self.set_expanded(tree, index, expanded)
    }

    /// User activation: toggle when allowed, otherwise only expand
    fn activate(&mut self, tree: &mut DomTree, index: usize) -> Result<(), AccordionError> {
        if self.allow_toggle() { self.toggle(tree, index) } else { self.expand(tree, index) }
    }

    fn focus_index(&self, document: &mut Document, index: Option<usize>) -> DomResult<Option<NodeId>> {
        let Some(item) = index.and_then(|i| self.items.get(i)) else {
            return Ok(None);
        };
        item.focus(document)?;
        Ok(Some(item.trigger()))
    }

    /// Focus the first trigger
    pub fn go_to_first_item(&self, document: &mut Document) -> DomResult<Option<NodeId>> {
        self.focus_index(document, FocusOrder::new(self.len()).first())
    }

    /// Focus the last trigger
    pub fn go_to_last_item(&self, document: &mut Document) -> DomResult<Option<NodeId>> {
        self.focus_index(document, FocusOrder::new(self.len()).last())
    }

    /// Focus the trigger before `item`, wrapping to the last
    pub fn go_to_previous_item(&self, document: &mut Document, item: NodeId) -> DomResult<Option<NodeId>> {
        let index = self.position(item).and_then(|i| FocusOrder::new(self.len()).previous(i));
        self.focus_index(document, index)
    }

    /// Focus the trigger after `item`, wrapping to the first
    pub fn go_to_next_item(&self, document: &mut Document, item: NodeId) -> DomResult<Option<NodeId>> {
        let index = self.position(item).and_then(|i| FocusOrder::new(self.len()).next(i));
        self.focus_index(document, index)
    }

    /// Keydown on the trigger of item `index`
    pub fn handle_key_down(
        &mut self,
        document: &mut Document,
        index: usize,
        event: &mut UiEvent,
    ) -> Result<(), AccordionError> {
        self.check_index(index)?;
        let Some(action) = event.code().and_then(|code| self.keymap.action_for(code)) else {
            return Ok(());
        };
        event.prevent_default();

        let element = self.items[index].element();
        match action {
            NavAction::Activate if self.allow_user_events() => self.activate(document.tree_mut(), index)?,
            NavAction::Activate => trace!("User events disabled, ignoring activation"),
            NavAction::Previous => {
                self.go_to_previous_item(document, element)?;
            }
            NavAction::Next => {
                self.go_to_next_item(document, element)?;
            }
            NavAction::First => {
                self.go_to_first_item(document)?;
            }
            NavAction::Last => {
                self.go_to_last_item(document)?;
            }
        }
        Ok(())
    }

    /// Click on the trigger of item `index`
    pub fn handle_click(
        &mut self,
        tree: &mut DomTree,
        index: usize,
        event: &mut UiEvent,
    ) -> Result<(), AccordionError> {
        self.check_index(index)?;
        event.prevent_default();
        if !self.allow_user_events() || self.items[index].is_trigger_disabled(tree) {
            trace!("Ignoring click on {}", self.items[index].id());
            return Ok(());
        }
        self.activate(tree, index)
    }

    /// Focus entered the container
    pub fn handle_focus_in(&self, tree: &mut DomTree) -> DomResult<()> {
        tree.add_class(self.element, FOCUS_CLASS)
    }

    /// Focus left the container
    pub fn handle_focus_out(&self, tree: &mut DomTree) -> DomResult<()> {
        tree.remove_class(self.element, FOCUS_CLASS)
    }

    pub fn snapshot(&self, tree: &DomTree) -> AccordionSnapshot {
        AccordionSnapshot {
            options: self.options,
            focus_within: tree.has_class(self.element, FOCUS_CLASS),
            items: self.items.iter().map(|item| ItemSnapshot::capture(tree, item)).collect(),
        }
    }
}
