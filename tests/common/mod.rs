#![allow(dead_code)]

use statusline_engine::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory host for driving an engine from tests.
pub struct TestHost {
    pub documents: HashMap<ViewId, Document>,
    pub selected: Option<Surface>,
    pub format: Rc<RefCell<String>>,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
            selected: None,
            format: Rc::new(RefCell::new("default-format".to_string())),
        }
    }

    pub fn with_document(mut self, view: ViewId, document: Document) -> Self {
        self.documents.insert(view, document);
        self
    }

    pub fn selecting(mut self, view: ViewId) -> Self {
        self.selected = Some(Surface::view(view));
        self
    }
}

impl Host for TestHost {
    type SavedFormat = String;

    fn document(&self, view: ViewId) -> Option<&Document> {
        self.documents.get(&view)
    }

    fn selected_surface(&self) -> Option<Surface> {
        self.selected
    }

    fn install_status_line(&mut self) -> String {
        self.format.replace("statusline".to_string())
    }

    fn restore_status_line(&mut self, saved: String) {
        *self.format.borrow_mut() = saved;
    }
}

pub fn layout(left: &[&str], right: &[&str]) -> LayoutConfig {
    LayoutConfig {
        left: left.iter().map(|id| SegmentId::new(*id)).collect(),
        right: right.iter().map(|id| SegmentId::new(*id)).collect(),
    }
}

pub fn plain(engine: &Engine<TestHost>, config: &LayoutConfig, view: ViewId, width: usize) -> String {
    engine.render(config, view, width).to_plain_string()
}
