//! Core application logic: state stores, event handling, and action dispatch.

pub mod action;
pub mod alert;
pub mod event;
pub mod forms;
pub mod handler;
pub mod state;
