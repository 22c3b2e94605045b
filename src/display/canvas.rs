/// Drawing surface supplied by the embedding application. This crate only
/// emits pixel writes; encoding or presenting the result is the caller's
/// concern.
pub trait IconCanvas {
    /// Set a single pixel. Implementations are only ever called with
    /// coordinates inside `size()`.
    fn set_pixel(&mut self, x: usize, y: usize, r: u8, g: u8, b: u8);

    /// Fill the whole surface with one color
    fn fill(&mut self, r: u8, g: u8, b: u8);

    /// Surface dimensions as (width, height) in pixels
    fn size(&self) -> (usize, usize);
}
