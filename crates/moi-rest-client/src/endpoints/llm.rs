//! LLM proxy sessions and chat messages.
//!
//! These endpoints are resource oriented: ids travel in the path and the
//! HTTP method selects the operation.

use moi_api_contract::*;
use reqwest::Method;
use serde_json::Value;

use crate::client::RawClient;
use crate::error::{Error, Result};
use crate::options::{query_pairs, CallOptions};

const SESSIONS_PATH: &str = "/llm-proxy/api/v1/sessions";
const MESSAGES_PATH: &str = "/llm-proxy/api/v1/chat-messages";

impl RawClient {
    pub async fn create_llm_session(
        &self,
        request: &LlmSessionCreateRequest,
    ) -> Result<LlmSession> {
        self.send_payload("create_llm_session", SESSIONS_PATH, request)
            .await
    }

    /// List sessions; unset filters are left out of the query string
    pub async fn list_llm_sessions(
        &self,
        query: &LlmSessionListQuery,
    ) -> Result<LlmSessionListResponse> {
        let options = CallOptions {
            query: query_pairs(query)?,
            ..CallOptions::default()
        };
        self.with_call_options(options).get_json(SESSIONS_PATH).await
    }

    pub async fn get_llm_session(&self, session_id: LlmSessionId) -> Result<LlmSession> {
        self.get_json(&session_path(session_id)?).await
    }

    pub async fn update_llm_session(
        &self,
        session_id: LlmSessionId,
        request: &LlmSessionUpdateRequest,
    ) -> Result<LlmSession> {
        let body = serde_json::to_value(request)?;
        self.send_json(Method::PUT, &session_path(session_id)?, Some(body))
            .await
    }

    pub async fn delete_llm_session(&self, session_id: LlmSessionId) -> Result<Value> {
        self.send_json(Method::DELETE, &session_path(session_id)?, None)
            .await
    }

    pub async fn list_llm_session_messages(
        &self,
        session_id: LlmSessionId,
    ) -> Result<LlmSessionMessagesResponse> {
        let path = format!("{}/messages", session_path(session_id)?);
        self.get_json(&path).await
    }

    /// Most recent message of the session whose generation has finished
    pub async fn get_llm_session_latest_completed_message(
        &self,
        session_id: LlmSessionId,
    ) -> Result<LlmLatestMessage> {
        let path = format!("{}/messages/latest-completed", session_path(session_id)?);
        self.get_json(&path).await
    }

    pub async fn get_llm_session_latest_message(
        &self,
        session_id: LlmSessionId,
    ) -> Result<LlmLatestMessage> {
        let path = format!("{}/messages/latest", session_path(session_id)?);
        self.get_json(&path).await
    }

    pub async fn create_llm_chat_message(
        &self,
        request: &LlmChatMessageCreateRequest,
    ) -> Result<LlmChatMessage> {
        self.send_payload("create_llm_chat_message", MESSAGES_PATH, request)
            .await
    }

    pub async fn get_llm_chat_message(&self, message_id: LlmMessageId) -> Result<LlmChatMessage> {
        self.get_json(&message_path(message_id)?).await
    }

    pub async fn update_llm_chat_message(
        &self,
        message_id: LlmMessageId,
        request: &LlmChatMessageUpdateRequest,
    ) -> Result<LlmChatMessage> {
        let body = serde_json::to_value(request)?;
        self.send_json(Method::PUT, &message_path(message_id)?, Some(body))
            .await
    }

    pub async fn delete_llm_chat_message(&self, message_id: LlmMessageId) -> Result<Value> {
        self.send_json(Method::DELETE, &message_path(message_id)?, None)
            .await
    }
}

fn session_path(session_id: LlmSessionId) -> Result<String> {
    if session_id == 0 {
        return Err(Error::validation("session_id cannot be empty"));
    }
    Ok(format!("{}/{}", SESSIONS_PATH, session_id))
}

fn message_path(message_id: LlmMessageId) -> Result<String> {
    if message_id == 0 {
        return Err(Error::validation("message_id cannot be empty"));
    }
    Ok(format!("{}/{}", MESSAGES_PATH, message_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_paths() {
        assert_eq!(session_path(7).unwrap(), "/llm-proxy/api/v1/sessions/7");
        assert_eq!(
            message_path(42).unwrap(),
            "/llm-proxy/api/v1/chat-messages/42"
        );
    }

    #[test]
    fn test_zero_ids_are_rejected() {
        assert_eq!(
            session_path(0).unwrap_err().to_string(),
            "session_id cannot be empty"
        );
        assert!(matches!(message_path(0), Err(Error::Validation(_))));
    }
}
