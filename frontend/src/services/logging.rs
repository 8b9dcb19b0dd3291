/// Console logger with a component tag so dashboard, forms, and tables
/// are distinguishable in the browser console.
pub struct Logger;

impl Logger {
    pub fn info(component: &str, message: &str) {
        gloo::console::log!(format!("[{}] {}", component, message));
    }

    pub fn warn(component: &str, message: &str) {
        gloo::console::warn!(format!("[{}] {}", component, message));
    }

    pub fn error(component: &str, message: &str) {
        gloo::console::error!(format!("[{}] {}", component, message));
    }
}
