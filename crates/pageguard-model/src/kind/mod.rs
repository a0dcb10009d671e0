mod notice;
pub use notice::NoticeKind;

mod action;
pub use action::ActionOp;

mod method;
pub use method::Method;
