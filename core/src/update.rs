//! Incoming update records and the closed sets of kinds they classify into.
//!
//! # Design
//! `Update` is decoded from a *host-cased* value: the response pipeline of
//! `getUpdates` already camel-cases the payload, so field names here are the
//! camelCase ones. Payloads stay `serde_json::Value`; the schema of each kind
//! is the platform's business, not the dispatcher's.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::case::to_host_case;
use crate::error::ApiError;

/// One update. Normally exactly one optional field is populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Update {
    pub update_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_post: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_channel_post: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_query: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chosen_inline_result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_query: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_query: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_checkout_query: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_answer: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub my_chat_member: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_member: Option<Value>,
}

impl Update {
    /// Decode an already host-cased update.
    pub fn from_host(value: Value) -> Result<Self, ApiError> {
        serde_json::from_value(value).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Camel-case a raw wire update (a webhook body, say) and decode it.
    pub fn from_wire(value: &Value) -> Result<Self, ApiError> {
        Self::from_host(to_host_case(value))
    }

    pub fn get(&self, kind: UpdateKind) -> Option<&Value> {
        match kind {
            UpdateKind::Message => self.message.as_ref(),
            UpdateKind::EditedMessage => self.edited_message.as_ref(),
            UpdateKind::ChannelPost => self.channel_post.as_ref(),
            UpdateKind::EditedChannelPost => self.edited_channel_post.as_ref(),
            UpdateKind::InlineQuery => self.inline_query.as_ref(),
            UpdateKind::ChosenInlineResult => self.chosen_inline_result.as_ref(),
            UpdateKind::CallbackQuery => self.callback_query.as_ref(),
            UpdateKind::ShippingQuery => self.shipping_query.as_ref(),
            UpdateKind::PreCheckoutQuery => self.pre_checkout_query.as_ref(),
            UpdateKind::Poll => self.poll.as_ref(),
            UpdateKind::PollAnswer => self.poll_answer.as_ref(),
            UpdateKind::MyChatMember => self.my_chat_member.as_ref(),
            UpdateKind::ChatMember => self.chat_member.as_ref(),
        }
    }

    /// Populated kinds with their payloads, in `UpdateKind::ALL` order.
    pub fn kinds(&self) -> impl Iterator<Item = (UpdateKind, &Value)> + '_ {
        UpdateKind::ALL
            .into_iter()
            .filter_map(move |kind| self.get(kind).map(|value| (kind, value)))
    }
}

/// Top-level update kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateKind {
    Message,
    EditedMessage,
    ChannelPost,
    EditedChannelPost,
    InlineQuery,
    ChosenInlineResult,
    CallbackQuery,
    ShippingQuery,
    PreCheckoutQuery,
    Poll,
    PollAnswer,
    MyChatMember,
    ChatMember,
}

impl UpdateKind {
    pub const ALL: [UpdateKind; 13] = [
        UpdateKind::Message,
        UpdateKind::EditedMessage,
        UpdateKind::ChannelPost,
        UpdateKind::EditedChannelPost,
        UpdateKind::InlineQuery,
        UpdateKind::ChosenInlineResult,
        UpdateKind::CallbackQuery,
        UpdateKind::ShippingQuery,
        UpdateKind::PreCheckoutQuery,
        UpdateKind::Poll,
        UpdateKind::PollAnswer,
        UpdateKind::MyChatMember,
        UpdateKind::ChatMember,
    ];

    /// Event name, identical to the host-cased field name.
    pub fn name(self) -> &'static str {
        match self {
            UpdateKind::Message => "message",
            UpdateKind::EditedMessage => "editedMessage",
            UpdateKind::ChannelPost => "channelPost",
            UpdateKind::EditedChannelPost => "editedChannelPost",
            UpdateKind::InlineQuery => "inlineQuery",
            UpdateKind::ChosenInlineResult => "chosenInlineResult",
            UpdateKind::CallbackQuery => "callbackQuery",
            UpdateKind::ShippingQuery => "shippingQuery",
            UpdateKind::PreCheckoutQuery => "preCheckoutQuery",
            UpdateKind::Poll => "poll",
            UpdateKind::PollAnswer => "pollAnswer",
            UpdateKind::MyChatMember => "myChatMember",
            UpdateKind::ChatMember => "chatMember",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Message sub-kinds. Several may be present on one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Text,
    Animation,
    Audio,
    Document,
    Photo,
    Sticker,
    Video,
    VideoNote,
    Voice,
    Contact,
    Dice,
    Game,
    Poll,
    Venue,
    Location,
    NewChatMembers,
    LeftChatMember,
    NewChatTitle,
    NewChatPhoto,
    DeleteChatPhoto,
    GroupChatCreated,
    SupergroupChatCreated,
    ChannelChatCreated,
    MigrateToChatId,
    MigrateFromChatId,
    PinnedMessage,
    Invoice,
    SuccessfulPayment,
}

impl MessageKind {
    pub const ALL: [MessageKind; 28] = [
        MessageKind::Text,
        MessageKind::Animation,
        MessageKind::Audio,
        MessageKind::Document,
        MessageKind::Photo,
        MessageKind::Sticker,
        MessageKind::Video,
        MessageKind::VideoNote,
        MessageKind::Voice,
        MessageKind::Contact,
        MessageKind::Dice,
        MessageKind::Game,
        MessageKind::Poll,
        MessageKind::Venue,
        MessageKind::Location,
        MessageKind::NewChatMembers,
        MessageKind::LeftChatMember,
        MessageKind::NewChatTitle,
        MessageKind::NewChatPhoto,
        MessageKind::DeleteChatPhoto,
        MessageKind::GroupChatCreated,
        MessageKind::SupergroupChatCreated,
        MessageKind::ChannelChatCreated,
        MessageKind::MigrateToChatId,
        MessageKind::MigrateFromChatId,
        MessageKind::PinnedMessage,
        MessageKind::Invoice,
        MessageKind::SuccessfulPayment,
    ];

    /// Event name, identical to the host-cased message field name.
    pub fn name(self) -> &'static str {
        match self {
            MessageKind::Text => "text",
            MessageKind::Animation => "animation",
            MessageKind::Audio => "audio",
            MessageKind::Document => "document",
            MessageKind::Photo => "photo",
            MessageKind::Sticker => "sticker",
            MessageKind::Video => "video",
            MessageKind::VideoNote => "videoNote",
            MessageKind::Voice => "voice",
            MessageKind::Contact => "contact",
            MessageKind::Dice => "dice",
            MessageKind::Game => "game",
            MessageKind::Poll => "poll",
            MessageKind::Venue => "venue",
            MessageKind::Location => "location",
            MessageKind::NewChatMembers => "newChatMembers",
            MessageKind::LeftChatMember => "leftChatMember",
            MessageKind::NewChatTitle => "newChatTitle",
            MessageKind::NewChatPhoto => "newChatPhoto",
            MessageKind::DeleteChatPhoto => "deleteChatPhoto",
            MessageKind::GroupChatCreated => "groupChatCreated",
            MessageKind::SupergroupChatCreated => "supergroupChatCreated",
            MessageKind::ChannelChatCreated => "channelChatCreated",
            MessageKind::MigrateToChatId => "migrateToChatId",
            MessageKind::MigrateFromChatId => "migrateFromChatId",
            MessageKind::PinnedMessage => "pinnedMessage",
            MessageKind::Invoice => "invoice",
            MessageKind::SuccessfulPayment => "successfulPayment",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Whether `message` carries this field with a non-null value.
    pub fn present_in(self, message: &Value) -> bool {
        message.get(self.name()).is_some_and(|v| !v.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_host_cased_update() {
        let update = Update::from_host(json!({
            "updateId": 3,
            "callbackQuery": {"id": "q", "data": "yes"}
        }))
        .unwrap();
        assert_eq!(update.update_id, 3);
        assert_eq!(update.callback_query, Some(json!({"id": "q", "data": "yes"})));
        assert!(update.message.is_none());
    }

    #[test]
    fn from_wire_applies_case_transform() {
        let update = Update::from_wire(&json!({
            "update_id": 4,
            "edited_message": {"message_id": 1, "edit_date": 10}
        }))
        .unwrap();
        assert_eq!(update.edited_message, Some(json!({"messageId": 1, "editDate": 10})));
    }

    #[test]
    fn missing_update_id_is_rejected() {
        let err = Update::from_host(json!({"message": {}})).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn null_and_unknown_fields_are_ignored() {
        let update = Update::from_host(json!({
            "updateId": 5,
            "message": null,
            "businessMessage": {"messageId": 1}
        }))
        .unwrap();
        assert_eq!(update.kinds().count(), 0);
    }

    #[test]
    fn kinds_follow_declared_order() {
        let update = Update::from_host(json!({
            "updateId": 6,
            "chatMember": {},
            "poll": {"id": "p"},
            "message": {"text": "x"}
        }))
        .unwrap();
        let names: Vec<_> = update.kinds().map(|(kind, _)| kind.name()).collect();
        assert_eq!(names, vec!["message", "poll", "chatMember"]);
    }

    #[test]
    fn names_round_trip() {
        for kind in UpdateKind::ALL {
            assert_eq!(UpdateKind::from_name(kind.name()), Some(kind));
        }
        for kind in MessageKind::ALL {
            assert_eq!(MessageKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(UpdateKind::from_name("business_message"), None);
    }

    #[test]
    fn message_kind_presence() {
        let message = json!({"messageId": 1, "photo": [], "caption": "c", "sticker": null});
        assert!(MessageKind::Photo.present_in(&message));
        assert!(!MessageKind::Sticker.present_in(&message));
        assert!(!MessageKind::Text.present_in(&message));
    }
}
