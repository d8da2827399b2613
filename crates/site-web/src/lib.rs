pub mod app;
pub mod components;
pub mod meta;
pub mod pages;
