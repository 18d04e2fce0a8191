mod action_queue;
mod actions;
mod event_loop;
mod input;

pub use event_loop::run_app;
