pub mod generation;
pub mod history;
pub mod meta;
pub mod wizard;
