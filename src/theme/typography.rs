//! Typography - Font sizes and spacing used by the disorder page

/// Typography constants
pub struct Typography;

impl Typography {
    // Font sizes
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 15.0;
    pub const HEADLINE: f32 = 18.0;
    pub const TITLE: f32 = 28.0;

    // Layout
    /// Width reserved for info row icons so titles line up
    pub const ROW_ICON_WIDTH: f32 = 28.0;
    /// Gap between page blocks
    pub const BLOCK_GAP: f32 = 20.0;
    /// Corner radius of disorder cards
    pub const CARD_RADIUS: f32 = 14.0;
}
