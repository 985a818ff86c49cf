//! Chat message rendering: author, linkified text and an optional attachment as HTML.

use serde::Deserialize;

use crate::core::linkify::linkify;

/// File attached to a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub url: String,
}

/// One chat message as stored in a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatMessage {
    pub user: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub file: Option<Attachment>,
}

/// Parse a JSON array of messages.
pub fn parse_transcript(json: &str) -> Result<Vec<ChatMessage>, serde_json::Error> {
    serde_json::from_str(json)
}

/// True when the file extension (after the last dot) is one of `formats`, ignoring ASCII case.
pub fn is_image(file_name: &str, formats: &[String]) -> bool {
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return false;
    };
    !ext.is_empty() && formats.iter().any(|f| f.eq_ignore_ascii_case(ext))
}

/// Render a single message as a `<div class="message">` fragment.
pub fn render_message(msg: &ChatMessage, formats: &[String]) -> String {
    let mut out = String::from("<div class=\"message\"><span class=\"user\">");
    out.push_str(&msg.user);
    out.push_str("</span>");
    if let Some(text) = msg.text.as_deref().filter(|t| !t.is_empty()) {
        out.push_str("<p class=\"text\">");
        out.push_str(&linkify(text));
        out.push_str("</p>");
    }
    if let Some(file) = &msg.file {
        if is_image(&file.name, formats) {
            out.push_str(&format!(
                "<img class=\"attachment\" src=\"{}\" alt=\"{}\">",
                file.url, file.name
            ));
        } else {
            out.push_str(&format!(
                "<a class=\"attachment\" href=\"{}\">{}</a>",
                file.url, file.name
            ));
        }
    }
    out.push_str("</div>");
    out
}

/// Render messages in order, one per line.
pub fn render_transcript(messages: &[ChatMessage], formats: &[String]) -> String {
    let mut out = String::new();
    for msg in messages {
        out.push_str(&render_message(msg, formats));
        out.push('\n');
    }
    log::info!("Rendered {} message(s)", messages.len());
    out
}
