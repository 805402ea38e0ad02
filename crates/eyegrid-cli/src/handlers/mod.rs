pub mod config;
pub mod export;
pub mod inspect;
pub mod labels;
pub mod view;
