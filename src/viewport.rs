use crate::error::Error;

/// Rectangular drawing area in window coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Viewport {
    /// Creates a viewport from a corner location and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Viewport, Error> {
        if width < 0 || height < 0 {
            return Err(Error::InvalidArgument(
                "viewport width and height cannot be negative".to_owned(),
            ));
        }
        Ok(Viewport {
            x,
            y,
            width,
            height,
        })
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}
