//! Reply definitions
//!
//! What the bridge says back to the user, independent of wire format.

use serde::Serialize;

/// Who can see a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Posted to the channel
    #[default]
    Public,

    /// Only the invoking user sees it (where supported)
    Ephemeral,
}

/// A field of a display card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A titled field list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub fields: Vec<EmbedField>,
}

impl Embed {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Add an inline field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline: true,
        });
        self
    }
}

/// A reply to send to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: Option<String>,
    pub embed: Option<Embed>,
    pub visibility: Visibility,
}

impl Reply {
    /// A public text reply
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embed: None,
            visibility: Visibility::Public,
        }
    }

    /// A public display card
    pub fn card(embed: Embed) -> Self {
        Self {
            content: None,
            embed: Some(embed),
            visibility: Visibility::Public,
        }
    }

    /// Make the reply visible only to the invoking user
    pub fn ephemeral(mut self) -> Self {
        self.visibility = Visibility::Ephemeral;
        self
    }

    pub fn is_ephemeral(&self) -> bool {
        self.visibility == Visibility::Ephemeral
    }

    /// Render as plain text (terminal output)
    pub fn to_plain_text(&self) -> String {
        let mut lines = Vec::new();
        if let Some(content) = &self.content {
            lines.push(content.clone());
        }
        if let Some(embed) = &self.embed {
            lines.push(embed.title.clone());
            for field in &embed.fields {
                lines.push(format!("  {}: {}", field.name, field.value));
            }
        }
        lines.join("\n")
    }
}
