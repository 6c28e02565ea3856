pub mod builder_action;
pub mod history_state;
pub mod reducer;
