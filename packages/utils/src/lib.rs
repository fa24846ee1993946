pub mod event;
pub mod message_type;
pub mod view;
