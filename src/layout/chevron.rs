use embedded_graphics::geometry::Point;

const CHEVRON_WIDTH: i32 = 8;
const CHEVRON_HEIGHT: i32 = 6;

/// Corner points of the downward chevron marking "now": bottom-left, apex,
/// bottom-right. Horizontally centered, base resting on the inner edge of
/// the bottom border.
pub fn chevron_points(image_width: i32, image_height: i32, border_width: i32) -> [Point; 3] {
    let x = (image_width - CHEVRON_WIDTH) / 2;
    let bottom = image_height - border_width;
    let top = bottom - CHEVRON_HEIGHT + 2;

    [
        Point::new(x, bottom),
        Point::new(x + CHEVRON_WIDTH / 2, top),
        Point::new(x + CHEVRON_WIDTH, bottom),
    ]
}
