//! HTTP gateway to the question-answering backend.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility.
//! Every failure (network, non-2xx status, undecodable body) is reported
//! as `ChatError::Transport`; error bodies are not parsed.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use chat_core::ports::{AskReply, ChatGateway};
use chat_types::{
    ChatError, Result,
    config::ClientConfig,
    conversation::{ConversationId, ConversationSummary},
    message::Message,
    wire::{AskRequest, AskResponse, NewChatResponse},
};

pub struct HttpGateway {
    config: ClientConfig,
}

impl HttpGateway {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// `{base}/history/{id}` with the id percent-encoded
    pub fn history_url(&self, id: &ConversationId) -> String {
        let segment = String::from(js_sys::encode_uri_component(id.as_str()));
        self.config.endpoint(&format!("history/{}", segment))
    }
}

#[async_trait(?Send)]
impl ChatGateway for HttpGateway {
    async fn list_conversations(&self) -> Result<Vec<ConversationSummary>> {
        let url = self.config.endpoint("history");
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        read_json(&url, response).await
    }

    async fn get_messages(&self, id: &ConversationId) -> Result<Vec<Message>> {
        let url = self.history_url(id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        read_json(&url, response).await
    }

    async fn create_conversation(&self) -> Result<ConversationId> {
        let url = self.config.endpoint("new");
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        let data: NewChatResponse = read_json(&url, response).await?;
        Ok(data.chat_id)
    }

    async fn ask(&self, text: &str, id: Option<&ConversationId>) -> Result<AskReply> {
        let url = self.config.endpoint("ask");
        let body = AskRequest {
            message: text.to_string(),
            chat_id: id.cloned(),
        };

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| transport(&url, e))?
            .send()
            .await
            .map_err(|e| transport(&url, e))?;

        let data: AskResponse = read_json(&url, response).await?;
        Ok(AskReply {
            reply: data.response,
            id: data.chat_id,
        })
    }

    fn gateway_name(&self) -> &str {
        "http"
    }
}

fn transport(url: &str, e: impl std::fmt::Display) -> ChatError {
    ChatError::Transport(format!("{}: {}", url, e))
}

async fn read_json<T: DeserializeOwned>(url: &str, response: Response) -> Result<T> {
    if !response.ok() {
        return Err(ChatError::Transport(format!(
            "{}: HTTP {}",
            url,
            response.status()
        )));
    }
    response.json().await.map_err(|e| transport(url, e))
}
