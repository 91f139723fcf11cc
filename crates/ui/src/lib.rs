//! Presentation-free UI layer: render models and the message loop.
//!
//! Nothing here draws. The widgets turn engine state into pixel-space
//! geometry, the app state turns UI messages into engine commands, and the
//! bridge carries both across a thread boundary. A GUI toolkit binds on top.

pub mod app;
pub mod bridge;
pub mod widgets;
