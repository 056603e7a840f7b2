pub mod send_messages;
