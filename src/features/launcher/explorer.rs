//! Platform default commands for revealing a path in the native file browser.

#[cfg(target_os = "windows")]
mod platform {
    pub const FOLDER_COMMAND: &str = r#"explorer "{path}""#;
    pub const FILE_COMMAND: &str = r#"explorer /select,"{path}""#;
}

#[cfg(target_os = "macos")]
mod platform {
    pub const FOLDER_COMMAND: &str = r#"open "{path}""#;
    pub const FILE_COMMAND: &str = r#"open -R "{path}""#;
}

// xdg-open cannot select a file, so files open their containing folder.
#[cfg(all(not(target_os = "windows"), not(target_os = "macos")))]
mod platform {
    pub const FOLDER_COMMAND: &str = r#"xdg-open "{path}""#;
    pub const FILE_COMMAND: &str = r#"xdg-open "{parent-path}""#;
}

pub fn default_folder_command() -> String {
    platform::FOLDER_COMMAND.to_string()
}

pub fn default_file_command() -> String {
    platform::FILE_COMMAND.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reference_a_placeholder() {
        assert!(default_folder_command().contains("{path}"));
        assert!(default_file_command().contains("path}"));
    }
}
