use crate::Result;
use crate::dialog::Dialogs;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::utils::get_document;
use std::cell::{Cell, RefCell};
use web_sys::{Element, Event, EventInit, EventTarget};

/// A fresh container appended to `<body>`, filled with `html`.
pub fn create_root(html: &str) -> Element {
    let document = get_document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_inner_html(html);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

/// Dispatch a cancellable event and return `true` if no listener cancelled it.
pub fn dispatch(target: &EventTarget, event_type: &str) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(event_type, &init).unwrap();
    target.dispatch_event(&event).unwrap()
}

/// Answers every confirmation with `answer` and records every message.
pub struct RecordingDialogs {
    answer: bool,
    pub confirmations: RefCell<Vec<String>>,
    pub notifications: RefCell<Vec<String>>,
}

impl RecordingDialogs {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            confirmations: RefCell::new(vec![]),
            notifications: RefCell::new(vec![]),
        }
    }
}

impl Dialogs for RecordingDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.confirmations.borrow_mut().push(message.to_owned());
        self.answer
    }

    fn notify(&self, message: &str) {
        self.notifications.borrow_mut().push(message.to_owned());
    }
}

struct PendingTask {
    due: u64,
    handle: TaskHandle,
    action: Box<dyn FnOnce()>,
}

/// Virtual clock: tasks only run when the test advances time.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    next_id: Cell<i32>,
    tasks: RefCell<Vec<PendingTask>>,
}

impl ManualScheduler {
    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            let next = {
                let mut tasks = self.tasks.borrow_mut();
                let position = tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due <= target)
                    .min_by_key(|(_, task)| (task.due, task.handle.id()))
                    .map(|(position, _)| position);
                position.map(|position| tasks.remove(position))
            };
            match next {
                Some(task) => {
                    self.now.set(task.due);
                    (task.action)();
                }
                None => break,
            }
        }
        self.now.set(target);
    }

    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, action: Box<dyn FnOnce()>) -> Result<TaskHandle> {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let handle = TaskHandle::new(id);
        self.tasks.borrow_mut().push(PendingTask {
            due: self.now.get() + u64::from(delay_ms),
            handle,
            action,
        });

        Ok(handle)
    }

    fn cancel(&self, handle: TaskHandle) {
        self.tasks.borrow_mut().retain(|task| task.handle != handle);
    }
}
