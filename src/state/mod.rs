//! State - GPUI Entity State Modules

pub mod settings_state;
