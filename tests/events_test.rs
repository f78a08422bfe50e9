use emoji_chime::events::{parse_event, HostEvent, MessageState};

#[test]
fn message_create_is_decoded() {
    let payload = r#"{
        "type":"MESSAGE_CREATE",
        "optimistic":false,
        "isPushNotification":false,
        "channelId":"42",
        "message":{"id":"9","content":"🗿","author":{"id":"7","bot":true},"state":"SENT"}
    }"#;
    let event = parse_event(payload).unwrap().unwrap();
    match event {
        HostEvent::MessageCreate(event) => {
            assert_eq!(event.channel_id, "42");
            assert_eq!(event.message.content.as_deref(), Some("🗿"));
            assert_eq!(event.message.state, Some(MessageState::Sent));
            assert!(event.message.author.unwrap().bot);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn unknown_message_state_is_tolerated() {
    let payload = r#"{"type":"MESSAGE_CREATE","channelId":"1","message":{"content":"hi","state":"QUEUED"}}"#;
    match parse_event(payload).unwrap().unwrap() {
        HostEvent::MessageCreate(event) => assert_eq!(event.message.state, Some(MessageState::Other)),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn reaction_add_is_decoded() {
    let payload = r#"{
        "type":"MESSAGE_REACTION_ADD",
        "optimistic":false,
        "channelId":"42",
        "messageId":"9",
        "messageAuthorId":"7",
        "userId":"8",
        "emoji":{"id":"123","name":"bonk","animated":true}
    }"#;
    match parse_event(payload).unwrap().unwrap() {
        HostEvent::ReactionAdd(event) => {
            assert_eq!(event.user_id, "8");
            assert_eq!(event.message_author_id.as_deref(), Some("7"));
            assert_eq!(event.emoji.name.as_deref(), Some("bonk"));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn voice_effect_without_emoji_is_decoded() {
    let payload = r#"{"type":"VOICE_CHANNEL_EFFECT_SEND","channelId":"3","userId":"4","animationType":1,"animationId":2}"#;
    match parse_event(payload).unwrap().unwrap() {
        HostEvent::VoiceChannelEffect(event) => {
            assert!(event.emoji.is_none());
            assert_eq!(event.animation_id, Some(2));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn unrelated_event_type_is_skipped() {
    let payload = r#"{"type":"TYPING_START","channelId":"1"}"#;
    assert!(parse_event(payload).unwrap().is_none());
    assert!(parse_event("{}").unwrap().is_none());
}

#[test]
fn malformed_payloads_are_errors() {
    assert!(parse_event("not json").is_err());

    let err = parse_event(r#"{"type":"MESSAGE_CREATE","channelId":"1"}"#).unwrap_err();
    assert!(err.to_string().contains("decode MESSAGE_CREATE event"));
}
