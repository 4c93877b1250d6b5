//! Game session: model and controller
//!
//! The model owns puzzle lifecycle; the controller turns user intents into
//! model calls and feedback.

mod controller;
mod model;

pub use controller::{
    Controller, MSG_COMPLETE, MSG_LOAD_FAILED, MSG_NOTHING_TO_UNDO, MSG_RESET, MSG_RESET_FAILED,
    MSG_SELECT_TWO, MSG_SWAP_FAILED, MSG_SWAPPED, MSG_UNDONE, Status, Update,
};
pub use model::Model;
