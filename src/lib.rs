//! Academic genealogy explorer.
//!
//! A genealogy is a tree of academics in which every edge leads from an
//! advisor to an advisee. The [`domain`] layer holds the tree and its
//! queries; [`application`] loads trees from CSV and executes the text
//! command language; [`cli`] drives it all from the terminal.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
