pub mod editor_app;
pub mod input_handler;
pub mod render_helper;
pub mod session;
pub mod shortcuts;
pub mod state;
pub mod tools;
pub mod viewport;

pub use editor_app::EditorApp;
pub use session::{EditorSession, SessionCallbacks};
pub use shortcuts::{KeyEvent, ShortcutHub};
pub use state::{LaunchOptions, parse_launch_args};
pub use tools::{Tool, ToolConfig};
pub use viewport::ViewState;
