pub mod models;

pub use models::{
    ActiveDocument, AdaptToResource, EditorInput, ResolvedTarget, Resource, ResourceKind,
    SelectionContext, SelectionItem,
};

use log::debug;
use std::path::PathBuf;

/// Resolves the selection, or failing that the active document, to a path.
///
/// A multi-item selection never resolves. A single item without a local
/// location, or an empty selection, falls back to the active document.
pub fn resolve(context: &SelectionContext) -> Option<ResolvedTarget> {
    let target = match context.items.as_slice() {
        [] => resolve_document(context.active_document.as_ref()),
        [item] => resolve_item(item).or_else(|| resolve_document(context.active_document.as_ref())),
        items => {
            debug!("resolve skipped multi selection count={}", items.len());
            return None;
        }
    };
    match &target {
        Some(target) => debug!(
            "resolve path={} is_directory={} project_root={:?}",
            target.path.display(),
            target.is_directory,
            target.project_root
        ),
        None => debug!("resolve found no target"),
    }
    target
}

fn resolve_item(item: &SelectionItem) -> Option<ResolvedTarget> {
    let resource = item.resource()?;
    let location = resource.location?;
    let project_root = match resource.kind {
        ResourceKind::Project => None,
        ResourceKind::File | ResourceKind::Folder => resource.project_root,
    };
    Some(ResolvedTarget::new(location, resource.kind.is_directory()).with_project_root(project_root))
}

fn resolve_document(document: Option<&ActiveDocument>) -> Option<ResolvedTarget> {
    document_path(document?).map(|path| ResolvedTarget::new(path, false))
}

fn document_path(document: &ActiveDocument) -> Option<PathBuf> {
    match document {
        ActiveDocument::TextEditor(input) => input_path(input),
        ActiveDocument::MultiPage { active_page } => document_path(active_page.as_deref()?),
        ActiveDocument::Other => None,
    }
}

fn input_path(input: &EditorInput) -> Option<PathBuf> {
    match input {
        EditorInput::WorkspaceFile { location } => location.clone(),
        EditorInput::ExternalFile { path } => path.is_file().then(|| path.clone()),
        EditorInput::Virtual => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SearchHit(PathBuf);

    impl AdaptToResource for SearchHit {
        fn adapt(&self) -> Option<Resource> {
            Some(Resource::file(self.0.clone(), "/proj"))
        }
    }

    #[test]
    fn single_file_records_project_root() {
        let context = SelectionContext::single(Resource::file("/proj/src/X", "/proj"));
        let target = resolve(&context).unwrap();
        assert_eq!(target.path, PathBuf::from("/proj/src/X"));
        assert!(!target.is_directory);
        assert_eq!(target.project_root, Some(PathBuf::from("/proj")));
    }

    #[test]
    fn project_has_no_separate_root() {
        let target = resolve(&SelectionContext::single(Resource::project("/proj"))).unwrap();
        assert_eq!(target.path, PathBuf::from("/proj"));
        assert!(target.is_directory);
        assert_eq!(target.project_root, None);
    }

    #[test]
    fn adaptable_items_resolve_through_their_resource() {
        let item = SelectionItem::adaptable(SearchHit(PathBuf::from("/proj/hit.rs")));
        let target = resolve(&SelectionContext::single(item)).unwrap();
        assert_eq!(target.path, PathBuf::from("/proj/hit.rs"));
    }

    #[test]
    fn multi_selection_never_resolves() {
        let context = SelectionContext {
            items: vec![
                Resource::folder("/proj/a", "/proj").into(),
                Resource::folder("/proj/b", "/proj").into(),
            ],
            active_document: Some(ActiveDocument::workspace_file("/proj/main.rs")),
        };
        assert_eq!(resolve(&context), None);
    }

    #[test]
    fn non_filesystem_item_falls_back_to_document() {
        let context = SelectionContext::single(SelectionItem::Other)
            .with_active_document(ActiveDocument::workspace_file("/proj/main.rs"));
        let target = resolve(&context).unwrap();
        assert_eq!(target.path, PathBuf::from("/proj/main.rs"));
        assert_eq!(target.project_root, None);
    }

    #[test]
    fn multi_page_editor_uses_active_page() {
        let context = SelectionContext::default().with_active_document(ActiveDocument::multi_page(
            ActiveDocument::workspace_file("/proj/Cargo.toml"),
        ));
        assert_eq!(resolve(&context).unwrap().path, PathBuf::from("/proj/Cargo.toml"));

        let empty = SelectionContext::default()
            .with_active_document(ActiveDocument::MultiPage { active_page: None });
        assert_eq!(resolve(&empty), None);
    }

    #[test]
    fn virtual_and_missing_external_documents_do_not_resolve() {
        let virtual_doc = SelectionContext::default()
            .with_active_document(ActiveDocument::TextEditor(EditorInput::Virtual));
        assert_eq!(resolve(&virtual_doc), None);

        let missing = SelectionContext::default().with_active_document(
            ActiveDocument::external_file("/definitely/not/here/pathtools.txt"),
        );
        assert_eq!(resolve(&missing), None);
    }
}
