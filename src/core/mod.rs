pub mod agent;
pub mod command;
pub mod countries;
