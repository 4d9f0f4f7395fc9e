//! Common reusable UI components.

mod send_button;
pub use send_button::SendButton;

mod toast_list;
pub use toast_list::ToastList;
