//=========================================================================
// UI Subtree
//=========================================================================
//
// Each scene owns one UiManager: a root panel of boxed elements that
// receives update/render forwarding and gets first refusal on input.
// When an element consumes an input event, game objects are not
// notified that frame.
//
// Widget visuals live outside the runtime; the one concrete element
// shipped here is the structural container.
//
//=========================================================================

use crate::core::Context;

//=== UiElement ===========================================================

/// A node of the UI subtree.
///
/// `handle_input` returns `true` to consume the event, suppressing both
/// later siblings and game-object input for the frame.
pub trait UiElement {
    fn handle_input(&mut self, _ctx: &mut Context) -> bool {
        false
    }

    fn update(&mut self, _dt: f32, _ctx: &mut Context) {}

    fn render(&mut self, _ctx: &mut Context) {}
}

//=== UiPanel =============================================================

/// Structural container element.
///
/// Children render in insertion order (later children on top), so input
/// dispatch walks them in reverse: the topmost child answers first.
pub struct UiPanel {
    children: Vec<Box<dyn UiElement>>,
}

impl UiPanel {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: Box<dyn UiElement>) {
        self.children.push(child);
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Default for UiPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl UiElement for UiPanel {
    fn handle_input(&mut self, ctx: &mut Context) -> bool {
        for child in self.children.iter_mut().rev() {
            if child.handle_input(ctx) {
                return true;
            }
        }
        false
    }

    fn update(&mut self, dt: f32, ctx: &mut Context) {
        for child in &mut self.children {
            child.update(dt, ctx);
        }
    }

    fn render(&mut self, ctx: &mut Context) {
        for child in &mut self.children {
            child.render(ctx);
        }
    }
}

//=== UiManager ===========================================================

/// Owns a scene's UI subtree and forwards the frame phases to it.
pub struct UiManager {
    root: UiPanel,
}

impl UiManager {
    /// Creates a manager with an empty root panel.
    pub fn new() -> Self {
        Self {
            root: UiPanel::new(),
        }
    }

    /// Adds an element under the root panel.
    pub fn add_element(&mut self, element: Box<dyn UiElement>) {
        self.root.add_child(element);
    }

    /// Drops the whole subtree; used on scene teardown or UI reset.
    pub fn clear_elements(&mut self) {
        self.root.clear();
    }

    pub fn root(&self) -> &UiPanel {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut UiPanel {
        &mut self.root
    }

    //--- Frame Forwarding -------------------------------------------------

    /// Returns `true` if the UI consumed the input this frame.
    pub fn handle_input(&mut self, ctx: &mut Context) -> bool {
        self.root.handle_input(ctx)
    }

    pub fn update(&mut self, dt: f32, ctx: &mut Context) {
        self.root.update(dt, ctx);
    }

    pub fn render(&mut self, ctx: &mut Context) {
        self.root.render(ctx);
    }
}

impl Default for UiManager {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    //--- Test Elements ----------------------------------------------------

    /// Consumes input when armed, and counts what it sees.
    struct ClickCatcher {
        armed: bool,
        log: Rc<RefCell<Vec<&'static str>>>,
        label: &'static str,
    }

    impl UiElement for ClickCatcher {
        fn handle_input(&mut self, _ctx: &mut Context) -> bool {
            self.log.borrow_mut().push(self.label);
            self.armed
        }
    }

    fn ctx() -> Context {
        Context::new((320.0, 180.0))
    }

    #[test]
    fn empty_ui_consumes_nothing() {
        let mut ui = UiManager::new();
        assert!(!ui.handle_input(&mut ctx()));
    }

    /// The last-added (topmost) element answers first, and consumption
    /// stops the walk.
    #[test]
    fn topmost_element_gets_first_refusal() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut ui = UiManager::new();

        ui.add_element(Box::new(ClickCatcher {
            armed: false,
            log: log.clone(),
            label: "bottom",
        }));
        ui.add_element(Box::new(ClickCatcher {
            armed: true,
            log: log.clone(),
            label: "top",
        }));

        assert!(ui.handle_input(&mut ctx()));
        assert_eq!(*log.borrow(), vec!["top"]);
    }

    #[test]
    fn unconsumed_input_walks_all_children() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut ui = UiManager::new();

        ui.add_element(Box::new(ClickCatcher {
            armed: false,
            log: log.clone(),
            label: "bottom",
        }));
        ui.add_element(Box::new(ClickCatcher {
            armed: false,
            log: log.clone(),
            label: "top",
        }));

        assert!(!ui.handle_input(&mut ctx()));
        assert_eq!(*log.borrow(), vec!["top", "bottom"]);
    }

    #[test]
    fn clear_elements_empties_the_tree() {
        let mut ui = UiManager::new();
        ui.add_element(Box::new(UiPanel::new()));
        assert_eq!(ui.root().len(), 1);

        ui.clear_elements();
        assert!(ui.root().is_empty());
    }

    #[test]
    fn nested_panels_forward_input() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut inner = UiPanel::new();
        inner.add_child(Box::new(ClickCatcher {
            armed: true,
            log: log.clone(),
            label: "nested",
        }));

        let mut ui = UiManager::new();
        ui.add_element(Box::new(inner));

        assert!(ui.handle_input(&mut ctx()));
        assert_eq!(*log.borrow(), vec!["nested"]);
    }
}
