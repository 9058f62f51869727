pub mod confirmation;
pub mod screen;
