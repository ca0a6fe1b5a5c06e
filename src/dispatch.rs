use tracing::debug;

use crate::gpio_input::Button;

type Handler<T> = Box<dyn FnMut(&mut T)>;

/// Routes button presses to registered handlers.
///
/// Handlers get `&mut T` for the duration of one dispatch, so two handlers
/// can never run against the same target at once.
pub struct InputDispatcher<T> {
    on_a: Option<Handler<T>>,
    on_b: Option<Handler<T>>,
}

impl<T> Default for InputDispatcher<T> {
    fn default() -> Self {
        Self {
            on_a: None,
            on_b: None,
        }
    }
}

impl<T> InputDispatcher<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `button`, replacing any earlier one.
    pub fn on_pressed<F>(&mut self, button: Button, handler: F)
    where
        F: FnMut(&mut T) + 'static,
    {
        let slot = match button {
            Button::A => &mut self.on_a,
            Button::B => &mut self.on_b,
        };
        *slot = Some(Box::new(handler));
    }

    /// Run the handler for `button`. Returns false if none is registered.
    pub fn dispatch(&mut self, button: Button, target: &mut T) -> bool {
        let slot = match button {
            Button::A => &mut self.on_a,
            Button::B => &mut self.on_b,
        };
        match slot {
            Some(handler) => {
                handler(target);
                true
            }
            None => {
                debug!(?button, "no handler registered");
                false
            }
        }
    }
}
