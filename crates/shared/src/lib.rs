//! Domain vocabulary shared by the site controller and the desktop front end.

pub mod catalog;
pub mod domain;
pub mod error;
