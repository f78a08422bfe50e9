use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub bot: bool,
}

pub trait Host {
    fn selected_channel_id(&self) -> Option<String>;
    fn is_blocked(&self, user_id: &str) -> bool;
    fn user(&self, user_id: &str) -> Option<User>;
    fn window_focused(&self) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    selected_channel: Option<String>,
    blocked: HashSet<String>,
    bots: HashSet<String>,
    focused: bool,
}

impl StaticHost {
    pub fn new(selected_channel: impl Into<String>) -> Self {
        Self {
            selected_channel: Some(selected_channel.into()),
            focused: true,
            ..Self::default()
        }
    }

    pub fn with_blocked<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocked.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_bots<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bots.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Host for StaticHost {
    fn selected_channel_id(&self) -> Option<String> {
        self.selected_channel.clone()
    }

    fn is_blocked(&self, user_id: &str) -> bool {
        self.blocked.contains(user_id)
    }

    fn user(&self, user_id: &str) -> Option<User> {
        Some(User {
            id: user_id.to_string(),
            bot: self.bots.contains(user_id),
        })
    }

    fn window_focused(&self) -> bool {
        self.focused
    }
}
