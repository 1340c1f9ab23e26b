//! Slack-style message rendered from a deployment event.

use serde::{Deserialize, Serialize};

use crate::envelope::{is_failure_status, DeploymentEvent};

pub const ATTACHMENT_TITLE: &str = "Deployment Status";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub text: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub text: String,
    pub color: Color,
    pub title: String,
}

/// Attachment side-bar color understood by the chat system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Danger,
    Good,
}

impl Color {
    pub fn for_status(status: &str) -> Self {
        if is_failure_status(status) {
            Color::Danger
        } else {
            Color::Good
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Danger => "danger",
            Color::Good => "good",
        }
    }
}

impl OutboundMessage {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Render a deployment event. Pure: the same event always yields the same message.
pub fn build_message(event: &DeploymentEvent) -> OutboundMessage {
    OutboundMessage {
        text: format!("`{}`", event.application_name),
        attachments: vec![Attachment {
            text: format!(
                "Deployment ID: {} Status: {}",
                event.deployment_id, event.status
            ),
            color: Color::for_status(&event.status),
            title: ATTACHMENT_TITLE.to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(status: &str) -> DeploymentEvent {
        DeploymentEvent {
            region: "us-east-1".into(),
            account_id: "123456789012".into(),
            event_trigger_name: "notify".into(),
            application_name: "orders-api".into(),
            deployment_id: "d-123".into(),
            deployment_group_name: "prod".into(),
            create_time: String::new(),
            complete_time: String::new(),
            status: status.into(),
        }
    }

    #[test]
    fn renders_success() {
        let msg = build_message(&event("SUCCEEDED"));
        assert_eq!(
            msg.to_json().unwrap(),
            r#"{"text":"`orders-api`","attachments":[{"text":"Deployment ID: d-123 Status: SUCCEEDED","color":"good","title":"Deployment Status"}]}"#
        );
    }

    #[test]
    fn renders_failure() {
        let msg = build_message(&event("FAILED"));
        assert_eq!(msg.attachments.len(), 1);
        assert_eq!(msg.attachments[0].color, Color::Danger);
        assert_eq!(msg.attachments[0].text, "Deployment ID: d-123 Status: FAILED");
    }

    #[test]
    fn color_is_binary() {
        assert_eq!(Color::for_status("FAILED"), Color::Danger);
        assert_eq!(Color::for_status("ABORTED"), Color::Danger);
        for status in ["SUCCEEDED", "IN_PROGRESS", "READY", "Failed", "aborted", ""] {
            assert_eq!(Color::for_status(status), Color::Good, "status {status:?}");
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let e = event("ABORTED");
        assert_eq!(
            build_message(&e).to_json().unwrap(),
            build_message(&e).to_json().unwrap()
        );
    }

    #[test]
    fn survives_serialization() {
        let msg = build_message(&event("ABORTED"));
        let parsed: OutboundMessage = serde_json::from_str(&msg.to_json().unwrap()).unwrap();
        assert_eq!(parsed.text, "`orders-api`");
        assert_eq!(parsed.attachments[0].color.as_str(), "danger");
        assert_eq!(parsed.attachments[0].title, ATTACHMENT_TITLE);
        assert_eq!(parsed, msg);
    }
}
