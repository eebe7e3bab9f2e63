//! Host-side enums and label values

/// Anchor points for widget positioning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Background fill style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BgFill {
    None,
    #[default]
    Solid,
    Blur,
}

/// Selects which host-provided image a widget displays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageType {
    #[default]
    None,
    Ammo,
    Health,
    Skull,
    Flag,
    Arrow,
}

/// Stacking tier for a widget relative to the host's own UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DepthTier {
    /// Behind or interleaved with the host's game UI.
    #[default]
    GameUi,
    /// Above the game UI (deploy screens, class selection).
    AboveGameUi,
    /// Topmost overlay.
    Overlay,
}

/// An opaque, already-formatted message token.
///
/// Message formatting and localization live in an external collaborator;
/// this layer never interprets the contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message(pub String);

impl Message {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

/// Text content for a text widget: a literal string or a pre-formatted
/// message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Label {
    Plain(String),
    Message(Message),
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_owned())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl From<Message> for Label {
    fn from(message: Message) -> Self {
        Self::Message(message)
    }
}
