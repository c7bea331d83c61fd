use crate::notify::enums::notify_command::NotifyCommand;
use crate::notify::errors::NotifyError;
use crate::notify::traits::notification_sink::NotificationSink;

impl NotifyCommand {
    pub async fn dispatch(&self, sink: &dyn NotificationSink) -> Result<(), NotifyError> {
        match self {
            NotifyCommand::SendMessage { to, body } => sink.send_message(to, body).await,
            NotifyCommand::SetStatus { show, status } => sink.set_status(show.as_deref(), status).await,
        }
    }
}
