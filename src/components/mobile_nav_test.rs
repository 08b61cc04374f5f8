use super::*;

#[test]
fn trigger_opens_and_locks_page_scroll() {
    let mut menu = MobileMenu::new();
    let view = menu.handle(MenuEvent::TriggerClick).expect("trigger always applies");
    assert_eq!(menu.state(), MenuState::Open);
    assert!(view.show);
    assert_eq!(view.aria_hidden, "false");
    assert_eq!(view.aria_expanded, "true");
    assert_eq!(view.body_overflow, "hidden");
}

#[test]
fn close_button_restores_page_scroll() {
    let mut menu = MobileMenu::new();
    menu.handle(MenuEvent::TriggerClick);
    let view = menu.handle(MenuEvent::CloseClick).expect("close always applies");
    assert_eq!(menu.state(), MenuState::Closed);
    assert!(!view.show);
    assert_eq!(view.aria_hidden, "true");
    assert_eq!(view.aria_expanded, "false");
    assert_eq!(view.body_overflow, "");
}

#[test]
fn escape_closes_only_an_open_menu() {
    let mut menu = MobileMenu::new();
    assert_eq!(menu.handle(MenuEvent::Escape), None);
    assert_eq!(menu.state(), MenuState::Closed);

    menu.handle(MenuEvent::TriggerClick);
    assert_eq!(menu.handle(MenuEvent::Escape), Some(MenuState::Closed.presentation()));
    assert_eq!(menu.state(), MenuState::Closed);
}

#[test]
fn following_a_link_closes_the_menu() {
    let mut menu = MobileMenu::new();
    menu.handle(MenuEvent::TriggerClick);
    menu.handle(MenuEvent::LinkClick);
    assert_eq!(menu.state(), MenuState::Closed);
}

#[test]
fn repeated_trigger_clicks_re_enter_open() {
    let mut menu = MobileMenu::new();
    let first = menu.handle(MenuEvent::TriggerClick);
    let second = menu.handle(MenuEvent::TriggerClick);
    assert_eq!(first, second);
    assert_eq!(menu.state(), MenuState::Open);
}
