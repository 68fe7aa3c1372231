pub mod config_loader;
pub mod logger;
pub mod pages;
pub mod site;
pub mod walk;
