/// High-level input coming from the widget layer. Pointer positions are in
/// canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    ZoomIn,
    ZoomOut,
    Reset,
    PanStart { x: f64, y: f64 },
    PanMove { x: f64, y: f64 },
    PanEnd,
    /// Takes effect at the next run; does not itself start one.
    SetAnimationDuration { seconds: f64 },
    RequestRender,
    RequestInitialRender,
}
