pub mod layout;
pub mod report_card;
