//! Application Context
//!
//! Shared state provided via Leptos Context API: the active view,
//! reload triggers for the two server-owned lists and the selected
//! board.

use leptos::prelude::*;

/// Top-level view selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Register,
    Login,
    Board,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active view - read
    pub view: ReadSignal<View>,
    /// Active view - write
    set_view: WriteSignal<View>,
    /// Trigger to refetch boards from the server - read
    pub boards_version: ReadSignal<u32>,
    set_boards_version: WriteSignal<u32>,
    /// Trigger to refetch tasks for the selected board - read
    pub tasks_version: ReadSignal<u32>,
    set_tasks_version: WriteSignal<u32>,
    /// Currently selected board, None until the user picks one - read
    pub selected_board: ReadSignal<Option<u32>>,
    set_selected_board: WriteSignal<Option<u32>>,
}

impl AppContext {
    pub fn new(
        view: (ReadSignal<View>, WriteSignal<View>),
        boards_version: (ReadSignal<u32>, WriteSignal<u32>),
        tasks_version: (ReadSignal<u32>, WriteSignal<u32>),
        selected_board: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>),
    ) -> Self {
        Self {
            view: view.0,
            set_view: view.1,
            boards_version: boards_version.0,
            set_boards_version: boards_version.1,
            tasks_version: tasks_version.0,
            set_tasks_version: tasks_version.1,
            selected_board: selected_board.0,
            set_selected_board: selected_board.1,
        }
    }

    /// Switch the active view
    pub fn navigate(&self, view: View) {
        self.set_view.set(view);
    }

    /// Trigger a refetch of the board list
    pub fn reload_boards(&self) {
        self.set_boards_version.update(|v| *v += 1);
    }

    /// Trigger a refetch of the task list
    pub fn reload_tasks(&self) {
        self.set_tasks_version.update(|v| *v += 1);
    }

    /// Change the selected board (None clears the task list)
    pub fn select_board(&self, board_id: Option<u32>) {
        self.set_selected_board.set(board_id);
    }
}

/// Get the app context, panics if not provided
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
