use super::{ColIdx, RowIdx};

// 屏幕上的位置（行、列）
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq)]
pub struct Position {
    pub col: ColIdx,
    pub row: RowIdx,
}
