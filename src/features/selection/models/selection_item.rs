use super::Resource;
use std::fmt;
use std::sync::Arc;

/// Host objects that are not resources themselves but can stand in for one,
/// such as a search hit or a tree node wrapping a file.
pub trait AdaptToResource: Send + Sync {
    fn adapt(&self) -> Option<Resource>;
}

#[derive(Clone)]
pub enum SelectionItem {
    Resource(Resource),
    Adaptable(Arc<dyn AdaptToResource>),
    /// Anything with no filesystem meaning (a method, a breakpoint, ...).
    Other,
}

impl SelectionItem {
    pub fn adaptable(item: impl AdaptToResource + 'static) -> Self {
        SelectionItem::Adaptable(Arc::new(item))
    }

    pub fn resource(&self) -> Option<Resource> {
        match self {
            SelectionItem::Resource(resource) => Some(resource.clone()),
            SelectionItem::Adaptable(adaptable) => adaptable.adapt(),
            SelectionItem::Other => None,
        }
    }
}

impl From<Resource> for SelectionItem {
    fn from(resource: Resource) -> Self {
        SelectionItem::Resource(resource)
    }
}

impl fmt::Debug for SelectionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionItem::Resource(resource) => f.debug_tuple("Resource").field(resource).finish(),
            SelectionItem::Adaptable(_) => f.write_str("Adaptable(..)"),
            SelectionItem::Other => f.write_str("Other"),
        }
    }
}
