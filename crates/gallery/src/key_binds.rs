use crate::message::{LightboxMessage, Message};
use cosmic::{
    iced::keyboard::{Key, Modifiers, key::Named},
    widget::menu::key_bind::{KeyBind, Modifier},
};
use gallery_nav::LightboxCommand;
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Lightbox(LightboxCommand),
}

impl MenuAction {
    pub fn message(self) -> Message {
        match self {
            MenuAction::Lightbox(LightboxCommand::Close) => {
                Message::Lightbox(LightboxMessage::Close)
            }
            MenuAction::Lightbox(LightboxCommand::Step(direction)) => {
                Message::Lightbox(LightboxMessage::Navigate(direction))
            }
        }
    }
}

static KEY_BINDS: Lazy<HashMap<KeyBind, MenuAction>> = Lazy::new(init_key_binds);

/// Lightbox bindings. Only subscribed to while the lightbox is open.
pub fn init_key_binds() -> HashMap<KeyBind, MenuAction> {
    let mut binds = HashMap::new();

    binds.insert(
        KeyBind {
            modifiers: vec![],
            key: Key::Named(Named::Escape),
        },
        MenuAction::Lightbox(LightboxCommand::Close),
    );

    binds.insert(
        KeyBind {
            modifiers: vec![],
            key: Key::Named(Named::ArrowLeft),
        },
        MenuAction::Lightbox(LightboxCommand::PREVIOUS),
    );

    binds.insert(
        KeyBind {
            modifiers: vec![],
            key: Key::Named(Named::ArrowRight),
        },
        MenuAction::Lightbox(LightboxCommand::NEXT),
    );

    binds
}

pub fn key_press_handler(key: Key, modifiers: Modifiers) -> Option<Message> {
    let mut mods = Vec::new();

    if modifiers.control() {
        mods.push(Modifier::Ctrl);
    }

    if modifiers.shift() {
        mods.push(Modifier::Shift);
    }

    if modifiers.alt() {
        mods.push(Modifier::Alt);
    }

    if modifiers.logo() {
        mods.push(Modifier::Super);
    }

    let key_bind = KeyBind {
        modifiers: mods,
        key,
    };

    KEY_BINDS
        .get(&key_bind)
        .map(|action| Message::KeyBind(*action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_types::Direction;

    fn action_for(key: Key, modifiers: Modifiers) -> Option<MenuAction> {
        match key_press_handler(key, modifiers) {
            Some(Message::KeyBind(action)) => Some(action),
            _ => None,
        }
    }

    #[test]
    fn test_lightbox_keys() {
        assert_eq!(
            action_for(Key::Named(Named::Escape), Modifiers::empty()),
            Some(MenuAction::Lightbox(LightboxCommand::Close))
        );
        assert_eq!(
            action_for(Key::Named(Named::ArrowLeft), Modifiers::empty()),
            Some(MenuAction::Lightbox(LightboxCommand::Step(
                Direction::Previous
            )))
        );
        assert_eq!(
            action_for(Key::Named(Named::ArrowRight), Modifiers::empty()),
            Some(MenuAction::Lightbox(LightboxCommand::Step(Direction::Next)))
        );
    }

    #[test]
    fn test_modifiers_and_other_keys_ignored() {
        assert_eq!(
            action_for(Key::Named(Named::ArrowRight), Modifiers::CTRL),
            None
        );
        assert_eq!(action_for(Key::Named(Named::Enter), Modifiers::empty()), None);
        assert_eq!(
            action_for(Key::Character("q".into()), Modifiers::empty()),
            None
        );
    }

    #[test]
    fn test_actions_map_to_lightbox_messages() {
        assert!(matches!(
            MenuAction::Lightbox(LightboxCommand::Close).message(),
            Message::Lightbox(LightboxMessage::Close)
        ));
        assert!(matches!(
            MenuAction::Lightbox(LightboxCommand::NEXT).message(),
            Message::Lightbox(LightboxMessage::Navigate(Direction::Next))
        ));
    }
}
