mod props;
pub use props::*;

mod icon;
pub use icon::*;

mod text_input;
pub use text_input::*;

mod checkbox;
pub use checkbox::*;

mod link;
pub use link::*;

mod form_field_label;
pub use form_field_label::*;

mod form_field_message;
pub use form_field_message::*;

mod form_field;
pub use form_field::*;
