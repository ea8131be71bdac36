mod prompt_form;
mod prompt_list;

pub use prompt_form::*;
pub use prompt_list::*;
