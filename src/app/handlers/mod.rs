//! Feature-Handler für mutierende Commands.

pub mod selection;
pub mod view;
