mod assets;
pub use assets::*;
use cfg_if::cfg_if;

cfg_if!(
    if #[cfg(feature = "assets")] {
        mod tesserae_css_assets;
        pub use tesserae_css_assets::*;
    }
);

mod icon_kind;
pub use icon_kind::*;
