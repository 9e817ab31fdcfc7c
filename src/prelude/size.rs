#[derive(Copy, Clone, Default, Debug, Eq, PartialEq)]
pub struct Size {
    pub height: usize,
    pub width: usize,
}
