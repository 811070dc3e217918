//! UI Components
//!
//! One Leptos component per file.

mod board_panel;
mod login_form;
mod new_task_form;
mod register_form;
mod session_bar;
mod task_item;
mod task_panel;
mod theme_toggle;

pub use board_panel::BoardPanel;
pub use login_form::LoginForm;
pub use new_task_form::NewTaskForm;
pub use register_form::RegisterForm;
pub use session_bar::SessionBar;
pub use task_item::TaskItem;
pub use task_panel::TaskPanel;
pub use theme_toggle::ThemeToggle;
