pub mod layout;
pub mod login_form;
pub mod markdown_text;
pub mod toast;

pub use login_form::LoginForm;
pub use markdown_text::MarkdownText;
pub use toast::ToastContainer;
