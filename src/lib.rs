pub mod carousel;
pub mod config;
pub mod error;
pub mod events;
pub mod menu;
pub mod surface;
pub mod tasks {
    pub mod input;
    pub mod ticker;
    pub mod viewer;
}
