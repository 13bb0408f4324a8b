//! Transport trait implementation for RestTransport.

use async_trait::async_trait;
use chatwidget_common::{new_correlation_id, SessionId, UserInfo};
use tracing::{debug, info};

use crate::{AgentReply, Transport, TransportError};

use super::client::{parse_replies, RestTransport};
use super::payload::{EndMetadata, EndOfConversation, WebhookRequest, END_CONVERSATION_COMMAND};

#[async_trait]
impl Transport for RestTransport {
    async fn send_message(
        &self,
        sender: &SessionId,
        text: &str,
        user_info: Option<&UserInfo>,
    ) -> Result<Vec<AgentReply>, TransportError> {
        let request_id = new_correlation_id();
        let request = WebhookRequest {
            sender: sender.as_str(),
            message: text,
            metadata: user_info,
        };

        debug!(
            %request_id,
            session_id = %sender,
            url = %self.webhook_url,
            chars = text.chars().count(),
            "Webhook request"
        );

        let body = self.post(&request).await?;
        let replies = parse_replies(&body)?;

        debug!(%request_id, replies = replies.len(), "Webhook response");
        Ok(replies)
    }

    async fn send_end_of_conversation(
        &self,
        report: &EndOfConversation,
    ) -> Result<(), TransportError> {
        let request = WebhookRequest {
            sender: report.session_id.as_str(),
            message: END_CONVERSATION_COMMAND,
            metadata: Some(EndMetadata::from(report)),
        };

        self.post(&request).await?;
        info!(
            session_id = %report.session_id,
            total_messages = report.total_messages(),
            auto = report.auto_ended,
            "End-of-conversation report delivered"
        );
        Ok(())
    }
}
