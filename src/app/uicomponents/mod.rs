mod inputview;
pub use inputview::InputView;

mod messagebar;
pub use messagebar::MessageBar;

mod uicomponent;
pub use uicomponent::UIComponent;
