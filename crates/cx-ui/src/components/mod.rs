pub mod footer;
pub mod modal;
pub mod nav;
pub mod stat_card;
