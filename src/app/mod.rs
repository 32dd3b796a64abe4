//! Core application logic: event types, pure reducers, and socket side effects.

pub mod action;
pub mod channels;
pub mod creators;
pub mod event;
pub mod handler;
pub mod servers;
pub mod state;
pub mod tab;
