use crate::utils::error::Result;

/// The editable text a host owns.
pub trait TextBuffer {
    fn contents(&self) -> Result<String>;
    fn replace(&mut self, text: String) -> Result<()>;
}

/// Short-lived confirmation messages shown to the user.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}
