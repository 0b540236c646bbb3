pub mod news;
pub mod page;
pub mod portfolio;
pub mod report;
pub mod source;
pub mod wire;
