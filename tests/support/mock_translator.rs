use std::cell::RefCell;
use std::rc::Rc;

use gesture_keys::{RequestId, Translator};

pub type Requests = Rc<RefCell<Vec<(RequestId, String)>>>;

/// Records requests; tests answer them through the controller.
#[derive(Debug, Default, Clone)]
pub struct MockTranslator {
    requests: Requests,
}

impl MockTranslator {
    /// The translator plus a handle to its request log.
    pub fn new() -> (Self, Requests) {
        let translator = Self::default();
        let requests = Rc::clone(&translator.requests);
        (translator, requests)
    }
}

impl Translator for MockTranslator {
    fn request(&mut self, id: RequestId, text: &str) {
        self.requests.borrow_mut().push((id, text.to_string()));
    }
}
