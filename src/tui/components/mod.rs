//! # TUI Components
//!
//! All components here are stateless: they are built each frame from the
//! core `ViewModel` and receive everything they draw as props.
//!
//! - `TitleBar`: heading and status message
//! - `ChoiceList`: checklists or items with cursor and check markers
//! - `InputPrompt`: the open text prompt, with the terminal cursor
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status line)
//! ├── choice_list.rs   (Body list)
//! └── input_prompt.rs  (Text entry box)
//! ```

mod choice_list;
mod input_prompt;
mod title_bar;

pub use choice_list::ChoiceList;
pub use input_prompt::{InputPrompt, PROMPT_HEIGHT};
pub use title_bar::TitleBar;
