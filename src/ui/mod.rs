pub mod prompts;
pub mod tables;

pub use prompts::{
    prompt_column_selection, prompt_confirmation, prompt_delete_link_confirmation,
    prompt_overwrite_confirmation, prompt_profile_name, prompt_token, text_input,
};
