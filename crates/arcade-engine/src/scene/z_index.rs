/// Stacking depth of a displayed handle.
///
/// Higher values appear on top of lower values. The debug overlay always
/// uses [`ZIndex::OVERLAY`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const OVERLAY: ZIndex = ZIndex(i32::MAX);
}
