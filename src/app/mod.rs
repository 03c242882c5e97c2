//! Application orchestration — shell state, actions, views, and input.

pub mod actions;
pub mod collab;
pub mod event;
pub mod handler;
pub mod settings;
pub mod state;
pub mod views;
