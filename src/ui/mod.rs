pub mod app;
pub mod audio;
pub mod left_panel;
pub mod node_panel;
pub mod result_view;
pub mod settings;
pub mod settings_io;
