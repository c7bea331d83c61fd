pub mod notification_sink;
