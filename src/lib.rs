//! Plain-text formatting with Unicode look-alikes.
//!
//! [`format`] holds the pure transformation engine. The remaining modules
//! make up the terminal front end built around it.

pub mod clipboard;
pub mod editor;
pub mod format;
pub mod render;
pub mod status;
pub mod theme;
