mod consent;
mod notice;
mod zoom;
pub use consent::WidgetConsent;
pub use notice::WidgetNotice;
pub use zoom::zoom;
