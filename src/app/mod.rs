pub mod field_loop;
pub mod headless;
pub mod network;
