//! Notices bound for the page

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use game_core::{Notice, Notifier};
use proto::ToView;

/// Queue of messages the page drains once per frame
#[derive(Clone, Default)]
pub struct PageNotifier {
    queue: Rc<RefCell<VecDeque<ToView>>>,
}

impl PageNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pop(&self) -> Option<ToView> {
        self.queue.borrow_mut().pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

impl Notifier for PageNotifier {
    fn notify(&self, notice: &Notice) {
        let text = notice.to_string();
        console_log(&text);

        let mut queue = self.queue.borrow_mut();
        queue.push_back(ToView::Notice { text });
        if let Notice::Won { winner } = *notice {
            queue.push_back(ToView::MatchOver { winner });
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn console_log(text: &str) {
    web_sys::console::log_1(&text.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn console_log(text: &str) {
    log::info!("{text}");
}
