//! Customer-side client for the Cleanzy waste-pickup service.
//!
//! [`api`] wraps the REST backend, [`chat`] holds the assistant widget's
//! conversation logic, and [`ui`] draws that widget with egui.

pub mod api;
pub mod chat;
pub mod common;
pub mod config;
pub mod ui;
