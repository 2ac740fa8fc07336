//! Small building blocks shared by the feature views.

mod button;
pub use button::{Button, ButtonVariant};

mod field;
pub use field::{SelectField, TextAreaField, TextField};

mod modal;
pub use modal::{ConfirmDialog, FormDialog, ModalOverlay};

mod notice;
pub use notice::NoticeBar;

mod layout;
pub use layout::{EmptyState, PageHeader, StatCard, Tabs};
