use crate::Result;
use crate::utils::get_window;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Identifies a delayed action so that it can be cancelled before it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(i32);

impl TaskHandle {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn id(&self) -> i32 {
        self.0
    }
}

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, action: Box<dyn FnOnce()>) -> Result<TaskHandle>;

    /// Cancelling a task that already ran has no effect.
    fn cancel(&self, handle: TaskHandle);
}

struct BrowserTask {
    done: Rc<Cell<bool>>,
    // Dropping the closure before the timeout fires would make the callback throw.
    _callback: Closure<dyn FnMut()>,
}

/// Delayed actions backed by `setTimeout`.
/// Callbacks are kept until their task is cancelled, or until the next
/// scheduling once they ran.
#[derive(Default)]
pub struct BrowserScheduler {
    tasks: RefCell<HashMap<i32, BrowserTask>>,
}

impl BrowserScheduler {
    pub fn retained_callbacks(&self) -> usize {
        self.tasks.borrow().len()
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, action: Box<dyn FnOnce()>) -> Result<TaskHandle> {
        self.tasks.borrow_mut().retain(|_, task| !task.done.get());

        let done = Rc::new(Cell::new(false));
        let callback: Closure<dyn FnMut()> = {
            let done = done.clone();
            // Marked done only once the action returned, as the action may schedule again.
            Closure::once(move || {
                action();
                done.set(true);
            })
        };
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let id = get_window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            timeout,
        )?;
        self.tasks.borrow_mut().insert(
            id,
            BrowserTask {
                done,
                _callback: callback,
            },
        );

        Ok(TaskHandle::new(id))
    }

    fn cancel(&self, handle: TaskHandle) {
        match get_window() {
            Ok(window) => window.clear_timeout_with_handle(handle.id()),
            Err(error) => log::warn!("Can't cancel task {}: {error:?}", handle.id()),
        }
        self.tasks.borrow_mut().remove(&handle.id());
    }
}
