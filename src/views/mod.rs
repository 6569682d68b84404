//! Presentation helpers that sit downstream of the stores: filter options,
//! card/detail view models, dashboard sections and one-shot notifications.

pub mod catalog;
pub mod dashboard;
pub mod notification;
