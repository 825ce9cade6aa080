//! Restaurant menu state core.
//!
//! Typed [`action::Action`]s flow through pure slice reducers composed by
//! [`root::RootReducer`]; [`store::Store`] serializes dispatch and notifies
//! subscribers; [`view`] renders the state as text.

pub mod action;
pub mod cli;
pub mod comments;
pub mod config;
pub mod form;
pub mod logging;
pub mod menu;
pub mod mvi;
pub mod root;
pub mod seed;
pub mod store;
pub mod view;
