/// Linear color with float components, as handed to clear-color and uniform
/// calls.
pub type Rgba = rgb::RGBA<f32>;

/// Builds a color from a `[r, g, b, a]` array, e.g. one read back from the
/// driver.
pub fn rgba_from_array(arr: [f32; 4]) -> Rgba {
    Rgba::new(arr[0], arr[1], arr[2], arr[3])
}

/// Flattens a color into the `[r, g, b, a]` array layout uniform uploads
/// expect.
pub fn rgba_to_array(color: Rgba) -> [f32; 4] {
    [color.r, color.g, color.b, color.a]
}
