/// One beat of the advance timer.
#[derive(Debug, Clone, Copy)]
pub struct Tick;

/// A click, pre-resolved to the region of the page it landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    /// The menu's toggle control.
    Toggle,
    /// Anywhere inside the menu container.
    InsideMenu,
    /// Anywhere else on the page.
    Outside,
}
