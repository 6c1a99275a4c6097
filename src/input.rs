use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::camera::Navigation;
use crate::space::Space;

/// What a key press asks the scene to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Navigate(Navigation),
    SelectSpace(Space),
    NextSpace,
    PreviousSpace,
    /// Pick the next parameter for keyboard adjustment.
    NextParameter,
    PreviousParameter,
    /// Move the picked parameter by this many slider steps.
    StepParameter(i32),
}

impl KeyAction {
    /// Whether holding the key down should keep repeating the action.
    pub fn repeats(self) -> bool {
        matches!(self, KeyAction::Navigate(_) | KeyAction::StepParameter(_))
    }
}

/// Default key bindings.
///
/// - **W/S**: forward/back
/// - **A/D**: strafe left/right
/// - **E/Q**: up/down
/// - **Arrow keys**: pan the camera target
/// - **1-5**: select model, world, view, NDC, rendered image
/// - **Tab / Shift+Tab**: next/previous space
/// - **PageDown / PageUp**: next/previous parameter
/// - **+ / -**: step the parameter up/down
pub fn key_action(key: KeyCode, modifiers: ModifiersState) -> Option<KeyAction> {
    let action = match key {
        KeyCode::KeyW => KeyAction::Navigate(Navigation::Forward),
        KeyCode::KeyS => KeyAction::Navigate(Navigation::Back),
        KeyCode::KeyA => KeyAction::Navigate(Navigation::StrafeLeft),
        KeyCode::KeyD => KeyAction::Navigate(Navigation::StrafeRight),
        KeyCode::KeyE => KeyAction::Navigate(Navigation::Up),
        KeyCode::KeyQ => KeyAction::Navigate(Navigation::Down),
        KeyCode::ArrowLeft => KeyAction::Navigate(Navigation::PanTargetLeft),
        KeyCode::ArrowRight => KeyAction::Navigate(Navigation::PanTargetRight),
        KeyCode::ArrowUp => KeyAction::Navigate(Navigation::PanTargetUp),
        KeyCode::ArrowDown => KeyAction::Navigate(Navigation::PanTargetDown),
        KeyCode::Digit1 => KeyAction::SelectSpace(Space::Model),
        KeyCode::Digit2 => KeyAction::SelectSpace(Space::World),
        KeyCode::Digit3 => KeyAction::SelectSpace(Space::View),
        KeyCode::Digit4 => KeyAction::SelectSpace(Space::Ndc),
        KeyCode::Digit5 => KeyAction::SelectSpace(Space::RenderedImage),
        KeyCode::Tab if modifiers.shift_key() => KeyAction::PreviousSpace,
        KeyCode::Tab => KeyAction::NextSpace,
        KeyCode::PageDown => KeyAction::NextParameter,
        KeyCode::PageUp => KeyAction::PreviousParameter,
        KeyCode::Equal | KeyCode::NumpadAdd => KeyAction::StepParameter(1),
        KeyCode::Minus | KeyCode::NumpadSubtract => KeyAction::StepParameter(-1),
        _ => return None,
    };
    Some(action)
}

/// Turns window events into [`KeyAction`]s.
#[derive(Debug, Default)]
pub struct Input {
    modifiers: ModifiersState,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a window event, returning the action of a bound key press.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<KeyAction> {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
                None
            }
            WindowEvent::KeyboardInput { event, .. } => self.key_event(event),
            _ => None,
        }
    }

    fn key_event(&self, event: &KeyEvent) -> Option<KeyAction> {
        if event.state != ElementState::Pressed {
            return None;
        }
        let PhysicalKey::Code(key) = event.physical_key else {
            return None;
        };
        key_action(key, self.modifiers).filter(|action| !event.repeat || action.repeats())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_keys() {
        assert_eq!(
            key_action(KeyCode::KeyW, ModifiersState::empty()),
            Some(KeyAction::Navigate(Navigation::Forward))
        );
        assert_eq!(
            key_action(KeyCode::ArrowUp, ModifiersState::empty()),
            Some(KeyAction::Navigate(Navigation::PanTargetUp))
        );
    }

    #[test]
    fn digits_select_spaces_in_pipeline_order() {
        let digits = [
            KeyCode::Digit1,
            KeyCode::Digit2,
            KeyCode::Digit3,
            KeyCode::Digit4,
            KeyCode::Digit5,
        ];
        for (key, space) in digits.into_iter().zip(Space::ALL) {
            assert_eq!(
                key_action(key, ModifiersState::empty()),
                Some(KeyAction::SelectSpace(space))
            );
        }
    }

    #[test]
    fn shift_tab_goes_back() {
        assert_eq!(
            key_action(KeyCode::Tab, ModifiersState::SHIFT),
            Some(KeyAction::PreviousSpace)
        );
        assert_eq!(
            key_action(KeyCode::Tab, ModifiersState::empty()),
            Some(KeyAction::NextSpace)
        );
    }

    #[test]
    fn parameter_keys() {
        assert_eq!(
            key_action(KeyCode::PageDown, ModifiersState::empty()),
            Some(KeyAction::NextParameter)
        );
        assert_eq!(
            key_action(KeyCode::PageUp, ModifiersState::empty()),
            Some(KeyAction::PreviousParameter)
        );
        assert_eq!(
            key_action(KeyCode::Equal, ModifiersState::SHIFT),
            Some(KeyAction::StepParameter(1))
        );
        assert_eq!(
            key_action(KeyCode::NumpadSubtract, ModifiersState::empty()),
            Some(KeyAction::StepParameter(-1))
        );
        assert!(KeyAction::StepParameter(1).repeats());
        assert!(!KeyAction::NextParameter.repeats());
    }

    #[test]
    fn unbound_keys() {
        assert_eq!(key_action(KeyCode::KeyZ, ModifiersState::empty()), None);
        assert!(!KeyAction::NextSpace.repeats());
    }
}
