pub mod active_document;
pub mod resolved_target;
pub mod resource;
pub mod selection_item;

pub use active_document::{ActiveDocument, EditorInput};
pub use resolved_target::ResolvedTarget;
pub use resource::{Resource, ResourceKind};
pub use selection_item::{AdaptToResource, SelectionItem};

/// Everything the host can tell us about what the user is pointing at.
#[derive(Debug, Clone, Default)]
pub struct SelectionContext {
    pub items: Vec<SelectionItem>,
    pub active_document: Option<ActiveDocument>,
}

impl SelectionContext {
    pub fn single(item: impl Into<SelectionItem>) -> Self {
        Self {
            items: vec![item.into()],
            active_document: None,
        }
    }

    pub fn with_active_document(mut self, document: ActiveDocument) -> Self {
        self.active_document = Some(document);
        self
    }
}
