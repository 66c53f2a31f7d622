//! Input dialogs for the three data-entry actions

pub mod budget;
pub mod expense;
pub mod income;
