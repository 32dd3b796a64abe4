//! Server, channel and tab state for a web IRC client.
//!
//! Events from the user and the socket bridge are folded into immutable
//! snapshots by pure reducers in [`app`]; [`bridge`] frames them as JSON
//! lines and [`ui`] derives the tab list from a snapshot.

pub mod app;
pub mod bridge;
pub mod config;
pub mod logging;
pub mod ui;
