pub mod launcher;
pub mod menu;
pub mod selection;
pub mod settings;
