pub mod command_line;
pub mod constants;
pub mod record;
pub mod settings;
