use std::path::PathBuf;

/// What backs the text in an editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorInput {
    /// A file inside the workspace.
    WorkspaceFile { location: Option<PathBuf> },
    /// A file opened from outside the workspace.
    ExternalFile { path: PathBuf },
    /// An unsaved buffer or any other input without a file on disk.
    Virtual,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveDocument {
    TextEditor(EditorInput),
    /// A tabbed editor; only the page currently shown is considered.
    MultiPage { active_page: Option<Box<ActiveDocument>> },
    Other,
}

impl ActiveDocument {
    pub fn workspace_file(location: impl Into<PathBuf>) -> Self {
        ActiveDocument::TextEditor(EditorInput::WorkspaceFile {
            location: Some(location.into()),
        })
    }

    pub fn external_file(path: impl Into<PathBuf>) -> Self {
        ActiveDocument::TextEditor(EditorInput::ExternalFile { path: path.into() })
    }

    pub fn multi_page(active_page: ActiveDocument) -> Self {
        ActiveDocument::MultiPage {
            active_page: Some(Box::new(active_page)),
        }
    }
}
