use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MESSAGE_CREATE: &str = "MESSAGE_CREATE";
pub const MESSAGE_REACTION_ADD: &str = "MESSAGE_REACTION_ADD";
pub const VOICE_CHANNEL_EFFECT_SEND: &str = "VOICE_CHANNEL_EFFECT_SEND";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostEvent {
    #[serde(rename = "MESSAGE_CREATE")]
    MessageCreate(MessageCreate),
    #[serde(rename = "MESSAGE_REACTION_ADD")]
    ReactionAdd(ReactionAdd),
    #[serde(rename = "VOICE_CHANNEL_EFFECT_SEND")]
    VoiceChannelEffect(VoiceChannelEffect),
}

impl HostEvent {
    pub fn channel_id(&self) -> &str {
        match self {
            HostEvent::MessageCreate(event) => &event.channel_id,
            HostEvent::ReactionAdd(event) => &event.channel_id,
            HostEvent::VoiceChannelEffect(event) => &event.channel_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCreate {
    #[serde(default)]
    pub optimistic: bool,
    #[serde(default)]
    pub is_push_notification: bool,
    pub channel_id: String,
    pub message: Message,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub state: Option<MessageState>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    #[serde(default)]
    pub bot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageState {
    Sending,
    SendFailed,
    Sent,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionAdd {
    #[serde(default)]
    pub optimistic: bool,
    pub channel_id: String,
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub message_author_id: Option<String>,
    pub user_id: String,
    pub emoji: ReactionEmoji,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceChannelEffect {
    #[serde(default)]
    pub emoji: Option<ReactionEmoji>,
    pub channel_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub animation_type: Option<u32>,
    #[serde(default)]
    pub animation_id: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionEmoji {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub animated: bool,
}

pub fn parse_event(payload: &str) -> anyhow::Result<Option<HostEvent>> {
    let value: Value = serde_json::from_str(payload).context("parse event payload")?;
    let event_type = value
        .get("type")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();

    match event_type.as_str() {
        MESSAGE_CREATE | MESSAGE_REACTION_ADD | VOICE_CHANNEL_EFFECT_SEND => {
            let event = serde_json::from_value(value)
                .with_context(|| format!("decode {event_type} event"))?;
            Ok(Some(event))
        }
        _ => Ok(None),
    }
}
